//! The five placement strategies a container can delegate layout to.
//!
//! Every strategy dispatches on the nine (width mode x height mode)
//! combinations of the incoming constraint. Each combination is either
//! solved directly or reduced in exactly one step to an already-implemented
//! combination, with the offending axis pinned to its clamped value — an
//! axis is clamped at most once, so the reduction chains always terminate.
//! Combinations a strategy does not implement fail with
//! [`LayoutError::UnsupportedConstraint`] instead of guessing.

mod border;
mod center;
mod column;
mod flow;
mod grid;

pub use self::border::BorderArrangement;
pub use self::center::CenterArrangement;
pub use self::column::ColumnArrangement;
pub use self::flow::FlowArrangement;
pub use self::grid::GridArrangement;

use crate::LayoutError;
use crate::container::Child;
use charta_types::{Size, SizeConstraint};

/// Placement key for children of a border-arranged container. Children
/// added without a key land in the center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// Turns a container's children plus a constraint into a size and
/// per-child bounds.
///
/// Arrangements work in content space: the container trims its insets off
/// the constraint before delegating and adds them back onto the returned
/// size. A strategy keeps indices and per-slot state only; the container
/// owns the child list and mirrors every `add`/`clear` into the strategy.
pub trait Arrangement: std::fmt::Debug {
    /// Notifies the strategy that the child at `index` entered the
    /// container with the given placement key.
    fn add(&mut self, _index: usize, _position: Position) {}

    /// Resets any per-child state; called when the container is cleared.
    fn clear(&mut self) {}

    /// Solves the children's sizes and bounds under `constraint`.
    fn arrange(
        &self,
        children: &mut [Child],
        constraint: &SizeConstraint,
    ) -> Result<Size, LayoutError>;
}
