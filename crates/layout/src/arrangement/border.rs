//! Compass layout: one child per edge plus a center that takes the rest.
use super::{Arrangement, Position};
use crate::LayoutError;
use crate::container::Child;
use charta_types::LengthConstraint::{Fixed, Range, Unconstrained};
use charta_types::{Interval, LengthConstraint, Rect, Size, SizeConstraint};

/// Places up to five children in top/bottom/left/right/center slots.
///
/// Top and bottom span the full width; left and right share the vertical
/// band between them and are forced to equal heights; the center fills the
/// remaining gap in that band. When distributing a fixed size, top and
/// bottom consume height first, then left and right consume width, and the
/// center takes what remains — that consumption order is part of the
/// contract.
///
/// Adding a second child with the same placement key displaces the first
/// from its slot (last add wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderArrangement {
    top: Option<usize>,
    bottom: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
    center: Option<usize>,
}

impl BorderArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    fn arrange_slot(
        children: &mut [Child],
        slot: Option<usize>,
        constraint: &SizeConstraint,
    ) -> Result<Size, LayoutError> {
        match slot {
            Some(index) => children[index].block.arrange(constraint),
            None => Ok(Size::ZERO),
        }
    }

    fn set_slot_bounds(children: &mut [Child], slot: Option<usize>, bounds: Rect) {
        if let Some(index) = slot {
            children[index].block.set_bounds(bounds);
        }
    }

    /// Everything at its natural size.
    fn arrange_uu(&self, children: &mut [Child]) -> Result<Size, LayoutError> {
        let top = Self::arrange_slot(children, self.top, &SizeConstraint::UNCONSTRAINED)?;
        let bottom = Self::arrange_slot(children, self.bottom, &SizeConstraint::UNCONSTRAINED)?;
        let left = Self::arrange_slot(children, self.left, &SizeConstraint::UNCONSTRAINED)?;
        let right = Self::arrange_slot(children, self.right, &SizeConstraint::UNCONSTRAINED)?;
        let center = Self::arrange_slot(children, self.center, &SizeConstraint::UNCONSTRAINED)?;

        let band_height = left.height.max(right.height).max(center.height);
        let width = top
            .width
            .max(bottom.width)
            .max(left.width + center.width + right.width);
        let height = top.height + bottom.height + band_height;

        Self::set_slot_bounds(children, self.top, Rect::new(0.0, 0.0, width, top.height));
        Self::set_slot_bounds(
            children,
            self.bottom,
            Rect::new(0.0, height - bottom.height, width, bottom.height),
        );
        Self::set_slot_bounds(
            children,
            self.left,
            Rect::new(0.0, top.height, left.width, band_height),
        );
        Self::set_slot_bounds(
            children,
            self.right,
            Rect::new(width - right.width, top.height, right.width, band_height),
        );
        Self::set_slot_bounds(
            children,
            self.center,
            Rect::new(
                left.width,
                top.height,
                width - left.width - right.width,
                band_height,
            ),
        );
        Ok(Size::new(width, height))
    }

    /// Derives the height needed at a fixed width, then distributes it.
    fn arrange_fu(&self, children: &mut [Child], width: f32) -> Result<Size, LayoutError> {
        let fixed_width = SizeConstraint::fixed_width(width);
        let top = Self::arrange_slot(children, self.top, &fixed_width)?;
        let bottom = Self::arrange_slot(children, self.bottom, &fixed_width)?;
        let left = Self::arrange_slot(
            children,
            self.left,
            &SizeConstraint::parts(LengthConstraint::range(0.0, width), Unconstrained),
        )?;
        let right = Self::arrange_slot(
            children,
            self.right,
            &SizeConstraint::parts(
                LengthConstraint::range(0.0, (width - left.width).max(0.0)),
                Unconstrained,
            ),
        )?;
        let side_height = left.height.max(right.height);
        let center_width = (width - left.width - right.width).max(0.0);
        let center = Self::arrange_slot(
            children,
            self.center,
            &SizeConstraint::fixed_width(center_width),
        )?;
        let height = top.height + bottom.height + side_height.max(center.height);
        self.arrange_ff(children, width, height)
    }

    /// Distributes a fully fixed size: top and bottom first, then the
    /// sides, then the center.
    fn arrange_ff(&self, children: &mut [Child], width: f32, height: f32) -> Result<Size, LayoutError> {
        let fixed_width = SizeConstraint::fixed_width(width);
        let top = Self::arrange_slot(children, self.top, &fixed_width)?;
        Self::set_slot_bounds(children, self.top, Rect::new(0.0, 0.0, width, top.height));

        let bottom = Self::arrange_slot(children, self.bottom, &fixed_width)?;
        Self::set_slot_bounds(
            children,
            self.bottom,
            Rect::new(0.0, height - bottom.height, width, bottom.height),
        );

        let band_height = (height - top.height - bottom.height).max(0.0);
        let left = Self::arrange_slot(
            children,
            self.left,
            &SizeConstraint::parts(
                LengthConstraint::range(0.0, width),
                LengthConstraint::fixed(band_height),
            ),
        )?;
        Self::set_slot_bounds(
            children,
            self.left,
            Rect::new(0.0, top.height, left.width, band_height),
        );

        let right = Self::arrange_slot(
            children,
            self.right,
            &SizeConstraint::parts(
                LengthConstraint::range(0.0, (width - left.width).max(0.0)),
                LengthConstraint::fixed(band_height),
            ),
        )?;
        Self::set_slot_bounds(
            children,
            self.right,
            Rect::new(width - right.width, top.height, right.width, band_height),
        );

        let center_width = (width - left.width - right.width).max(0.0);
        Self::arrange_slot(
            children,
            self.center,
            &SizeConstraint::new(center_width, band_height),
        )?;
        Self::set_slot_bounds(
            children,
            self.center,
            Rect::new(left.width, top.height, center_width, band_height),
        );
        Ok(Size::new(width, height))
    }

    fn arrange_rr(
        &self,
        children: &mut [Child],
        width_range: Interval,
        height_range: Interval,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if width_range.contains(size.width) && height_range.contains(size.height) {
            Ok(size)
        } else {
            self.arrange_ff(
                children,
                width_range.constrain(size.width),
                height_range.constrain(size.height),
            )
        }
    }
}

impl Arrangement for BorderArrangement {
    fn add(&mut self, index: usize, position: Position) {
        let slot = match position {
            Position::Center => &mut self.center,
            Position::Top => &mut self.top,
            Position::Bottom => &mut self.bottom,
            Position::Left => &mut self.left,
            Position::Right => &mut self.right,
        };
        *slot = Some(index);
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn arrange(
        &self,
        children: &mut [Child],
        constraint: &SizeConstraint,
    ) -> Result<Size, LayoutError> {
        log::trace!("border arrange under {constraint:?}");
        match (constraint.width, constraint.height) {
            (Unconstrained, Unconstrained) => self.arrange_uu(children),
            (Fixed(width), Unconstrained) => self.arrange_fu(children, width),
            (Fixed(width), Fixed(height)) => self.arrange_ff(children, width, height),
            (Range(widths), Range(heights)) => self.arrange_rr(children, widths, heights),
            _ => Err(LayoutError::unsupported("border", constraint)),
        }
    }
}
