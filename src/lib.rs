//! `charta` — 2D charting library core.
//!
//! This crate carries the box-constraint layout engine that sizes and
//! positions nested chart regions (titles, legends, labels, plot panels)
//! before anything is drawn: a pure geometry solver from
//! (children, constraint) to (size, per-child bounds).
//!
//! ```
//! use charta::{BlockContainer, EmptyBlock, FlowArrangement, SizeConstraint};
//! use charta::Block as _;
//!
//! let mut legend = BlockContainer::new(FlowArrangement::new(4.0, 4.0));
//! legend.add(EmptyBlock::new(40.0, 12.0));
//! legend.add(EmptyBlock::new(40.0, 12.0));
//!
//! let size = legend.arrange(&SizeConstraint::fixed_width(100.0)).unwrap();
//! assert_eq!(size.height, 12.0);
//! ```

pub use charta_layout as layout;
pub use charta_style as style;
pub use charta_types as types;

pub use charta_layout::{
    Arrangement, Block, BlockContainer, BlockFrame, BorderArrangement, BoxModel,
    CenterArrangement, Child, ColumnArrangement, EmptyBlock, FlowArrangement, GridArrangement,
    Insets, Interval, LayoutError, LengthConstraint, LengthUnit, Position, Rect, Size,
    SizeConstraint,
};
