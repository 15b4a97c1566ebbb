//! Primitives for size, position and length ranges.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A closed `[lower, upper]` interval of lengths.
///
/// Well-formedness is enforced at construction so that all downstream range
/// math can assume it. A zero-width interval is legal and means "exactly
/// this value".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f32,
    upper: f32,
}

impl Interval {
    /// # Panics
    ///
    /// Panics if either bound is not finite or if `lower > upper`.
    pub fn new(lower: f32, upper: f32) -> Self {
        assert!(
            lower.is_finite() && upper.is_finite(),
            "interval bounds must be finite, got [{lower}, {upper}]"
        );
        assert!(
            lower <= upper,
            "interval lower bound {lower} exceeds upper bound {upper}"
        );
        Self { lower, upper }
    }

    pub fn lower(&self) -> f32 {
        self.lower
    }

    pub fn upper(&self) -> f32 {
        self.upper
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Saturates `value` into the interval: `lower` if below, `upper` if
    /// above, unchanged otherwise.
    pub fn constrain(&self, value: f32) -> f32 {
        value.clamp(self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_contains_and_constrain() {
        let range = Interval::new(50.0, 100.0);
        assert!(range.contains(50.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(49.9));
        assert_eq!(range.constrain(30.0), 50.0);
        assert_eq!(range.constrain(130.0), 100.0);
        assert_eq!(range.constrain(75.0), 75.0);
    }

    #[test]
    fn point_interval_is_legal() {
        let point = Interval::new(40.0, 40.0);
        assert!(point.contains(40.0));
        assert_eq!(point.constrain(0.0), 40.0);
    }

    #[test]
    #[should_panic(expected = "exceeds upper bound")]
    fn inverted_interval_is_rejected() {
        let _ = Interval::new(10.0, 5.0);
    }

    #[test]
    #[should_panic(expected = "must be finite")]
    fn non_finite_interval_is_rejected() {
        let _ = Interval::new(0.0, f32::INFINITY);
    }
}
