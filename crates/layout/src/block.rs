//! The layout-participant contract and the leaf spacer block.
use crate::LayoutError;
use crate::box_model::BoxModel;
use charta_types::{Rect, Size, SizeConstraint};

/// A rectangular layout participant.
///
/// Implementors expose their [`BoxModel`] and solve their own size under a
/// constraint; containers recurse into children while doing so. `arrange`
/// must be idempotent: called twice with the same children and constraint
/// it returns the same size and leaves the same bounds, so a caller may
/// probe a size and arrange again to finalize.
///
/// Measuring a natural size is simply
/// `arrange(&SizeConstraint::UNCONSTRAINED)`.
pub trait Block: std::fmt::Debug {
    fn box_model(&self) -> &BoxModel;

    fn box_model_mut(&mut self) -> &mut BoxModel;

    /// Computes the size of this block under `constraint` and, for
    /// containers, assigns bounds to every child.
    fn arrange(&mut self, constraint: &SizeConstraint) -> Result<Size, LayoutError>;

    /// The placement recorded by the parent's arrangement, in
    /// parent-content coordinates.
    fn bounds(&self) -> Rect {
        self.box_model().bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.box_model_mut().set_bounds(bounds);
    }
}

/// A block with no content of its own.
///
/// Occupies its nominal size plus insets; used for spacing and as a
/// placeholder for regions whose content is drawn elsewhere.
#[derive(Debug, Clone, Default)]
pub struct EmptyBlock {
    box_model: BoxModel,
}

impl EmptyBlock {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            box_model: BoxModel::with_size(width, height),
        }
    }

    pub fn with_box_model(box_model: BoxModel) -> Self {
        Self { box_model }
    }
}

impl Block for EmptyBlock {
    fn box_model(&self) -> &BoxModel {
        &self.box_model
    }

    fn box_model_mut(&mut self) -> &mut BoxModel {
        &mut self.box_model
    }

    fn arrange(&mut self, constraint: &SizeConstraint) -> Result<Size, LayoutError> {
        let natural = Size::new(
            self.box_model.calculate_total_width(self.box_model.width),
            self.box_model.calculate_total_height(self.box_model.height),
        );
        Ok(constraint.constrained(natural))
    }
}
