//! Shared region geometry: insets, nominal size and solved bounds.
use charta_style::{BlockFrame, Insets};
use charta_types::{Interval, LengthConstraint, Rect, SizeConstraint};

/// The geometry every layout participant carries.
///
/// Three independent insets are applied outside-in, always in the same
/// order: margin (pure spacing), frame (the visible boundary's thickness),
/// padding (pure spacing). The nominal `width`/`height` is what leaf
/// regions with no intrinsic content occupy; `bounds` is written by the
/// parent's arrangement and read back at draw time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxModel {
    pub margin: Insets,
    pub frame: BlockFrame,
    pub padding: Insets,
    pub width: f32,
    pub height: f32,
    bounds: Rect,
}

impl BoxModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The width left for content after trimming margin, frame and padding,
    /// in that order. Each step floors at zero; a negative content width is
    /// never produced.
    pub fn trim_to_content_width(&self, outer: f32) -> f32 {
        let width = self.margin.trim_width(outer);
        let width = self.frame.insets().trim_width(width);
        self.padding.trim_width(width)
    }

    /// Vertical counterpart of [`trim_to_content_width`](Self::trim_to_content_width).
    pub fn trim_to_content_height(&self, outer: f32) -> f32 {
        let height = self.margin.trim_height(outer);
        let height = self.frame.insets().trim_height(height);
        self.padding.trim_height(height)
    }

    /// The outer width occupied by `content` width plus padding, frame and
    /// margin — the exact inverse of [`trim_to_content_width`](Self::trim_to_content_width).
    pub fn calculate_total_width(&self, content: f32) -> f32 {
        let width = self.padding.extend_width(content);
        let width = self.frame.insets().extend_width(width);
        self.margin.extend_width(width)
    }

    /// Vertical counterpart of [`calculate_total_width`](Self::calculate_total_width).
    pub fn calculate_total_height(&self, content: f32) -> f32 {
        let height = self.padding.extend_height(content);
        let height = self.frame.insets().extend_height(height);
        self.margin.extend_height(height)
    }

    /// Transforms an outer constraint into the constraint seen by content:
    /// fixed values and range bounds are trimmed through the inset
    /// pipeline, unconstrained axes pass through.
    pub fn to_content_constraint(&self, constraint: &SizeConstraint) -> SizeConstraint {
        let width = match constraint.width {
            LengthConstraint::Unconstrained => LengthConstraint::Unconstrained,
            LengthConstraint::Fixed(value) => {
                LengthConstraint::Fixed(self.trim_to_content_width(value))
            }
            LengthConstraint::Range(interval) => LengthConstraint::Range(Interval::new(
                self.trim_to_content_width(interval.lower()),
                self.trim_to_content_width(interval.upper()),
            )),
        };
        let height = match constraint.height {
            LengthConstraint::Unconstrained => LengthConstraint::Unconstrained,
            LengthConstraint::Fixed(value) => {
                LengthConstraint::Fixed(self.trim_to_content_height(value))
            }
            LengthConstraint::Range(interval) => LengthConstraint::Range(Interval::new(
                self.trim_to_content_height(interval.lower()),
                self.trim_to_content_height(interval.upper()),
            )),
        };
        SizeConstraint::parts(width, height)
    }

    /// The content rectangle inside `area` once margin, frame and padding
    /// are trimmed off. Used when drawing into solved bounds.
    pub fn content_area(&self, area: Rect) -> Rect {
        let area = self.margin.trim_rect(area);
        let area = self.frame.insets().trim_rect(area);
        self.padding.trim_rect(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoxModel {
        BoxModel {
            margin: Insets::all(4.0),
            frame: BlockFrame::uniform(1.0),
            padding: Insets::new(2.0, 3.0, 2.0, 3.0),
            ..BoxModel::default()
        }
    }

    #[test]
    fn trim_and_total_are_exact_inverses() {
        let model = sample();
        for content in [0.0, 1.0, 37.5, 250.0] {
            let total = model.calculate_total_width(content);
            assert_eq!(model.trim_to_content_width(total), content);
            let total = model.calculate_total_height(content);
            assert_eq!(model.trim_to_content_height(total), content);
        }
    }

    #[test]
    fn zero_insets_are_identity() {
        let model = BoxModel::new();
        assert_eq!(model.trim_to_content_width(123.0), 123.0);
        assert_eq!(model.calculate_total_height(45.0), 45.0);
    }

    #[test]
    fn trimming_never_goes_negative() {
        let model = sample();
        // total horizontal insets: 4+4 margin, 1+1 frame, 3+3 padding = 16
        assert_eq!(model.trim_to_content_width(10.0), 0.0);
        assert_eq!(model.trim_to_content_width(16.0), 0.0);
    }

    #[test]
    fn content_constraint_trims_fixed_and_ranges() {
        let model = sample();
        let constraint = SizeConstraint::parts(
            LengthConstraint::fixed(100.0),
            LengthConstraint::range(10.0, 120.0),
        );
        let content = model.to_content_constraint(&constraint);
        // horizontal insets total 16, vertical 14
        assert_eq!(content.width, LengthConstraint::Fixed(84.0));
        assert_eq!(
            content.height,
            LengthConstraint::Range(Interval::new(0.0, 106.0))
        );
        let unconstrained = model.to_content_constraint(&SizeConstraint::UNCONSTRAINED);
        assert_eq!(unconstrained, SizeConstraint::UNCONSTRAINED);
    }

    #[test]
    fn content_area_applies_all_three_insets() {
        let model = sample();
        let area = model.content_area(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(area, Rect::new(8.0, 7.0, 84.0, 36.0));
    }
}
