//! The sizing-constraint model consumed by the layout engine.
//!
//! Each axis of a [`SizeConstraint`] carries one of three modes: no
//! constraint at all (use the natural length), an exact fixed length, or a
//! closed range the length is clamped into.

use crate::geometry::{Interval, Size};

/// Sizing mode for a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthConstraint {
    /// No constraint: the natural length is used as-is.
    Unconstrained,
    /// The length must equal this exact value.
    Fixed(f32),
    /// The length is clamped into this interval.
    Range(Interval),
}

impl LengthConstraint {
    /// # Panics
    ///
    /// Panics if `value` is negative or not finite; negative lengths are
    /// meaningless and must never enter the solver.
    pub fn fixed(value: f32) -> Self {
        assert!(
            value.is_finite() && value >= 0.0,
            "fixed length must be finite and non-negative, got {value}"
        );
        Self::Fixed(value)
    }

    pub fn range(lower: f32, upper: f32) -> Self {
        Self::Range(Interval::new(lower, upper))
    }

    /// Applies this constraint to a naturally measured length.
    pub fn constrain(&self, natural: f32) -> f32 {
        match self {
            Self::Unconstrained => natural,
            Self::Fixed(value) => *value,
            Self::Range(interval) => interval.constrain(natural),
        }
    }

    /// Mode label used in diagnostics and error messages.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Unconstrained => "unconstrained",
            Self::Fixed(_) => "fixed",
            Self::Range(_) => "range",
        }
    }
}

/// A width/height pair of [`LengthConstraint`]s describing what the caller
/// allows for a solved size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraint {
    pub width: LengthConstraint,
    pub height: LengthConstraint,
}

impl SizeConstraint {
    /// No constraint on either axis.
    pub const UNCONSTRAINED: Self = Self {
        width: LengthConstraint::Unconstrained,
        height: LengthConstraint::Unconstrained,
    };

    pub fn parts(width: LengthConstraint, height: LengthConstraint) -> Self {
        Self { width, height }
    }

    /// Both axes fixed.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: LengthConstraint::fixed(width),
            height: LengthConstraint::fixed(height),
        }
    }

    /// Fixed width, unconstrained height.
    pub fn fixed_width(width: f32) -> Self {
        Self {
            width: LengthConstraint::fixed(width),
            height: LengthConstraint::Unconstrained,
        }
    }

    /// Unconstrained width, fixed height.
    pub fn fixed_height(height: f32) -> Self {
        Self {
            width: LengthConstraint::Unconstrained,
            height: LengthConstraint::fixed(height),
        }
    }

    /// Both axes ranged.
    pub fn ranged(width: Interval, height: Interval) -> Self {
        Self {
            width: LengthConstraint::Range(width),
            height: LengthConstraint::Range(height),
        }
    }

    /// Applies both axes to a naturally measured size.
    pub fn constrained(&self, natural: Size) -> Size {
        Size::new(
            self.width.constrain(natural.width),
            self.height.constrain(natural.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_passes_natural_size_through() {
        let natural = Size::new(123.0, 45.0);
        assert_eq!(SizeConstraint::UNCONSTRAINED.constrained(natural), natural);
    }

    #[test]
    fn fixed_overrides_natural_size() {
        let constraint = SizeConstraint::new(300.0, 200.0);
        assert_eq!(
            constraint.constrained(Size::new(10.0, 999.0)),
            Size::new(300.0, 200.0)
        );
    }

    #[test]
    fn range_saturates_natural_size() {
        let constraint =
            SizeConstraint::ranged(Interval::new(50.0, 100.0), Interval::new(50.0, 100.0));
        assert_eq!(
            constraint.constrained(Size::new(30.0, 130.0)),
            Size::new(50.0, 100.0)
        );
        assert_eq!(
            constraint.constrained(Size::new(75.0, 75.0)),
            Size::new(75.0, 75.0)
        );
    }

    #[test]
    fn mixed_axes_are_independent() {
        let constraint = SizeConstraint::fixed_width(80.0);
        assert_eq!(
            constraint.constrained(Size::new(10.0, 25.0)),
            Size::new(80.0, 25.0)
        );
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_fixed_length_is_rejected() {
        let _ = LengthConstraint::fixed(-1.0);
    }
}
