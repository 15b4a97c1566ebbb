//! Single-row layout that wraps into new rows when width runs out.
use super::Arrangement;
use crate::LayoutError;
use crate::container::Child;
use charta_types::LengthConstraint::{Fixed, Range, Unconstrained};
use charta_types::{Interval, Rect, Size, SizeConstraint};

/// Lays children out left to right at their natural sizes, starting a new
/// row whenever the next child would overrun a fixed width.
///
/// Gaps are inserted between siblings only, never at the container edges.
/// The first child of a row is always placed — clipped to the available
/// width if it alone overflows — so layout always makes progress.
#[derive(Debug, Clone)]
pub struct FlowArrangement {
    pub horizontal_gap: f32,
    pub vertical_gap: f32,
}

impl Default for FlowArrangement {
    fn default() -> Self {
        Self::new(2.0, 2.0)
    }
}

impl FlowArrangement {
    pub fn new(horizontal_gap: f32, vertical_gap: f32) -> Self {
        Self {
            horizontal_gap,
            vertical_gap,
        }
    }

    /// Single row at natural sizes.
    fn arrange_uu(&self, children: &mut [Child]) -> Result<Size, LayoutError> {
        let mut x = 0.0;
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for child in children.iter_mut() {
            let size = child.block.arrange(&SizeConstraint::UNCONSTRAINED)?;
            child
                .block
                .set_bounds(Rect::new(x, 0.0, size.width, size.height));
            x += size.width + self.horizontal_gap;
            width += size.width;
            height = height.max(size.height);
        }
        if children.len() > 1 {
            width += self.horizontal_gap * (children.len() - 1) as f32;
        }
        Ok(Size::new(width, height))
    }

    /// Row-wrapping layout against a fixed width; the free axis grows to
    /// the sum of row heights plus the gaps consumed.
    fn arrange_fu(&self, children: &mut [Child], width: f32) -> Result<Size, LayoutError> {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut row_height = 0.0f32;
        let mut row_len = 0usize;
        for child in children.iter_mut() {
            let size = child.block.arrange(&SizeConstraint::UNCONSTRAINED)?;
            if row_len > 0 && x + size.width > width {
                // wrap below the tallest member of the closing row
                x = 0.0;
                y += row_height + self.vertical_gap;
                row_height = 0.0;
                row_len = 0;
            }
            let placed = if row_len == 0 {
                size.width.min(width)
            } else {
                size.width
            };
            child.block.set_bounds(Rect::new(x, y, placed, size.height));
            x += placed + self.horizontal_gap;
            row_height = row_height.max(size.height);
            row_len += 1;
        }
        let height = if children.is_empty() { 0.0 } else { y + row_height };
        Ok(Size::new(width, height))
    }

    fn arrange_ff(&self, children: &mut [Child], width: f32, height: f32) -> Result<Size, LayoutError> {
        self.arrange_fu(children, width)?;
        Ok(Size::new(width, height))
    }

    fn arrange_fr(
        &self,
        children: &mut [Child],
        width: f32,
        height_range: Interval,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_fu(children, width)?;
        if height_range.contains(size.height) {
            Ok(size)
        } else {
            self.arrange_ff(children, width, height_range.constrain(size.height))
        }
    }

    fn arrange_ru(&self, children: &mut [Child], width_range: Interval) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if width_range.contains(size.width) {
            Ok(size)
        } else {
            self.arrange_fu(children, width_range.constrain(size.width))
        }
    }

    fn arrange_rf(
        &self,
        children: &mut [Child],
        width_range: Interval,
        height: f32,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if width_range.contains(size.width) {
            Ok(Size::new(size.width, height))
        } else {
            self.arrange_ff(children, width_range.constrain(size.width), height)
        }
    }

    fn arrange_rr(
        &self,
        children: &mut [Child],
        width_range: Interval,
        height_range: Interval,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        match (
            width_range.contains(size.width),
            height_range.contains(size.height),
        ) {
            (true, true) => Ok(size),
            (false, true) => {
                self.arrange_fr(children, width_range.constrain(size.width), height_range)
            }
            (true, false) => {
                self.arrange_rf(children, width_range, height_range.constrain(size.height))
            }
            (false, false) => self.arrange_ff(
                children,
                width_range.constrain(size.width),
                height_range.constrain(size.height),
            ),
        }
    }
}

impl Arrangement for FlowArrangement {
    fn arrange(
        &self,
        children: &mut [Child],
        constraint: &SizeConstraint,
    ) -> Result<Size, LayoutError> {
        log::trace!("flow arrange under {constraint:?}");
        match (constraint.width, constraint.height) {
            (Unconstrained, Unconstrained) => self.arrange_uu(children),
            (Fixed(width), Unconstrained) => self.arrange_fu(children, width),
            (Fixed(width), Fixed(height)) => self.arrange_ff(children, width, height),
            (Fixed(width), Range(heights)) => self.arrange_fr(children, width, heights),
            (Range(widths), Unconstrained) => self.arrange_ru(children, widths),
            (Range(widths), Fixed(height)) => self.arrange_rf(children, widths, height),
            (Range(widths), Range(heights)) => self.arrange_rr(children, widths, heights),
            (Unconstrained, Fixed(_) | Range(_)) => {
                Err(LayoutError::unsupported("flow", constraint))
            }
        }
    }
}
