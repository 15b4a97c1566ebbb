//! Centers a single block inside the available space.
use super::Arrangement;
use crate::LayoutError;
use crate::container::Child;
use charta_types::LengthConstraint::{Fixed, Range, Unconstrained};
use charta_types::{Interval, Rect, Size, SizeConstraint};

/// Centers the container's first block at its natural size.
///
/// Only the first child participates; a fixed axis centers the block along
/// it (`(outer - child) / 2`, which may go negative for oversized children
/// — centered overflow), an unconstrained axis collapses to the child's
/// natural extent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterArrangement;

impl CenterArrangement {
    pub fn new() -> Self {
        Self
    }

    fn natural(children: &mut [Child]) -> Result<Size, LayoutError> {
        match children.first_mut() {
            Some(child) => child.block.arrange(&SizeConstraint::UNCONSTRAINED),
            None => Ok(Size::ZERO),
        }
    }

    fn place(children: &mut [Child], bounds: Rect) {
        if let Some(child) = children.first_mut() {
            child.block.set_bounds(bounds);
        }
    }

    fn arrange_uu(&self, children: &mut [Child]) -> Result<Size, LayoutError> {
        let size = Self::natural(children)?;
        Self::place(children, Rect::new(0.0, 0.0, size.width, size.height));
        Ok(size)
    }

    fn arrange_fu(&self, children: &mut [Child], width: f32) -> Result<Size, LayoutError> {
        let size = Self::natural(children)?;
        Self::place(
            children,
            Rect::new((width - size.width) / 2.0, 0.0, size.width, size.height),
        );
        Ok(Size::new(width, size.height))
    }

    fn arrange_uf(&self, children: &mut [Child], height: f32) -> Result<Size, LayoutError> {
        let size = Self::natural(children)?;
        Self::place(
            children,
            Rect::new(0.0, (height - size.height) / 2.0, size.width, size.height),
        );
        Ok(Size::new(size.width, height))
    }

    fn arrange_ff(&self, children: &mut [Child], width: f32, height: f32) -> Result<Size, LayoutError> {
        let size = Self::natural(children)?;
        Self::place(
            children,
            Rect::new(
                (width - size.width) / 2.0,
                (height - size.height) / 2.0,
                size.width,
                size.height,
            ),
        );
        Ok(Size::new(width, height))
    }

    fn arrange_ru(&self, children: &mut [Child], width_range: Interval) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if width_range.contains(size.width) {
            Ok(size)
        } else {
            self.arrange_fu(children, width_range.constrain(size.width))
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
        let size = self.arrange_fu(children, width)?;
        if height_range.contains(size.height) {
            Ok(size)
        } else {
            self.arrange_ff(children, width, height_range.constrain(size.height))
        }
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

impl Arrangement for CenterArrangement {
    fn arrange(
        &self,
        children: &mut [Child],
        constraint: &SizeConstraint,
    ) -> Result<Size, LayoutError> {
        log::trace!("center arrange under {constraint:?}");
        match (constraint.width, constraint.height) {
            (Unconstrained, Unconstrained) => self.arrange_uu(children),
            (Fixed(width), Unconstrained) => self.arrange_fu(children, width),
            (Unconstrained, Fixed(height)) => self.arrange_uf(children, height),
            (Fixed(width), Fixed(height)) => self.arrange_ff(children, width, height),
            (Range(widths), Unconstrained) => self.arrange_ru(children, widths),
            (Unconstrained, Range(heights)) => self.arrange_ur(children, heights),
            (Fixed(width), Range(heights)) => self.arrange_fr(children, width, heights),
            (Range(widths), Fixed(height)) => self.arrange_rf(children, widths, height),
            (Range(widths), Range(heights)) => self.arrange_rr(children, widths, heights),
        }
    }
}
