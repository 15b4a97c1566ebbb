pub mod constraint;
pub mod geometry;

pub use self::constraint::{LengthConstraint, SizeConstraint};
pub use self::geometry::{Interval, Rect, Size};
