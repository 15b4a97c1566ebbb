use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(
        "{arrangement} arrangement does not support the {width} x {height} constraint combination"
    )]
    UnsupportedConstraint {
        arrangement: &'static str,
        width: &'static str,
        height: &'static str,
    },
}

impl LayoutError {
    pub(crate) fn unsupported(arrangement: &'static str, constraint: &SizeConstraint) -> Self {
        Self::UnsupportedConstraint {
            arrangement,
            width: constraint.width.mode_name(),
            height: constraint.height.mode_name(),
        }
    }
}

pub mod arrangement;
pub mod block;
pub mod box_model;
pub mod container;

pub use self::arrangement::{
    Arrangement, BorderArrangement, CenterArrangement, ColumnArrangement, FlowArrangement,
    GridArrangement, Position,
};
pub use self::block::{Block, EmptyBlock};
pub use self::box_model::BoxModel;
pub use self::container::{BlockContainer, Child};

// Re-export the foundation types used throughout so downstream code cannot
// end up with mismatched versions.
pub use charta_style::{BlockFrame, Insets, LengthUnit};
pub use charta_types::{Interval, LengthConstraint, Rect, Size, SizeConstraint};
