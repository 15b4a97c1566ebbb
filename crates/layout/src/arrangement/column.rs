//! Single-column layout that wraps into new columns when height runs out.
use super::Arrangement;
use crate::LayoutError;
use crate::container::Child;
use charta_types::LengthConstraint::{Fixed, Range, Unconstrained};
use charta_types::{Interval, Rect, Size, SizeConstraint};

/// The transpose of [`FlowArrangement`](super::FlowArrangement): children
/// stack top to bottom at their natural sizes, and a new column opens to
/// the right — offset by the widest member of the column just closed —
/// whenever the next child would overrun a fixed height.
///
/// The first child of a column is always placed, clipped to the available
/// height if it alone overflows.
#[derive(Debug, Clone)]
pub struct ColumnArrangement {
    pub horizontal_gap: f32,
    pub vertical_gap: f32,
}

impl Default for ColumnArrangement {
    fn default() -> Self {
        Self::new(2.0, 2.0)
    }
}

impl ColumnArrangement {
    pub fn new(horizontal_gap: f32, vertical_gap: f32) -> Self {
        Self {
            horizontal_gap,
            vertical_gap,
        }
    }

    /// Single column at natural sizes.
    fn arrange_uu(&self, children: &mut [Child]) -> Result<Size, LayoutError> {
        let mut y = 0.0;
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for child in children.iter_mut() {
            let size = child.block.arrange(&SizeConstraint::UNCONSTRAINED)?;
            child
                .block
                .set_bounds(Rect::new(0.0, y, size.width, size.height));
            y += size.height + self.vertical_gap;
            height += size.height;
            width = width.max(size.width);
        }
        if children.len() > 1 {
            height += self.vertical_gap * (children.len() - 1) as f32;
        }
        Ok(Size::new(width, height))
    }

    /// Column-wrapping layout against a fixed height; the free axis grows
    /// to the sum of column widths plus the gaps consumed.
    fn arrange_uf(&self, children: &mut [Child], height: f32) -> Result<Size, LayoutError> {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut column_width = 0.0f32;
        let mut column_len = 0usize;
        for child in children.iter_mut() {
            let size = child.block.arrange(&SizeConstraint::UNCONSTRAINED)?;
            if column_len > 0 && y + size.height > height {
                // wrap to the right of the widest member of the closing column
                y = 0.0;
                x += column_width + self.horizontal_gap;
                column_width = 0.0;
                column_len = 0;
            }
            let placed = if column_len == 0 {
                size.height.min(height)
            } else {
                size.height
            };
            child.block.set_bounds(Rect::new(x, y, size.width, placed));
            y += placed + self.vertical_gap;
            column_width = column_width.max(size.width);
            column_len += 1;
        }
        let width = if children.is_empty() { 0.0 } else { x + column_width };
        Ok(Size::new(width, height))
    }

    fn arrange_ff(&self, children: &mut [Child], width: f32, height: f32) -> Result<Size, LayoutError> {
        self.arrange_uf(children, height)?;
        Ok(Size::new(width, height))
    }

    fn arrange_rf(
        &self,
        children: &mut [Child],
        width_range: Interval,
        height: f32,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_uf(children, height)?;
        if width_range.contains(size.width) {
            Ok(size)
        } else {
            self.arrange_ff(children, width_range.constrain(size.width), height)
        }
    }

    fn arrange_ur(&self, children: &mut [Child], height_range: Interval) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if height_range.contains(size.height) {
            Ok(size)
        } else {
            self.arrange_uf(children, height_range.constrain(size.height))
        }
    }

    fn arrange_fr(
        &self,
        children: &mut [Child],
        width: f32,
        height_range: Interval,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if height_range.contains(size.height) {
            Ok(Size::new(width, size.height))
        } else {
            self.arrange_ff(children, width, height_range.constrain(size.height))
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
            (true, false) => {
                self.arrange_rf(children, width_range, height_range.constrain(size.height))
            }
            (false, true) => {
                self.arrange_fr(children, width_range.constrain(size.width), height_range)
            }
            (false, false) => self.arrange_ff(
                children,
                width_range.constrain(size.width),
                height_range.constrain(size.height),
            ),
        }
    }
}

impl Arrangement for ColumnArrangement {
    fn arrange(
        &self,
        children: &mut [Child],
        constraint: &SizeConstraint,
    ) -> Result<Size, LayoutError> {
        log::trace!("column arrange under {constraint:?}");
        match (constraint.width, constraint.height) {
            (Unconstrained, Unconstrained) => self.arrange_uu(children),
            (Unconstrained, Fixed(height)) => self.arrange_uf(children, height),
            (Fixed(width), Fixed(height)) => self.arrange_ff(children, width, height),
            (Range(widths), Fixed(height)) => self.arrange_rf(children, widths, height),
            (Unconstrained, Range(heights)) => self.arrange_ur(children, heights),
            (Fixed(width), Range(heights)) => self.arrange_fr(children, width, heights),
            (Range(widths), Range(heights)) => self.arrange_rr(children, widths, heights),
            (Fixed(_) | Range(_), Unconstrained) => {
                Err(LayoutError::unsupported("column", constraint))
            }
        }
    }
}
