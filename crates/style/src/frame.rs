//! The visible boundary a region may draw between its margin and padding.
use crate::insets::Insets;
use serde::{Deserialize, Serialize};

/// Per-edge line widths of a region's frame.
///
/// Only the thickness participates in layout; painting the frame is the
/// renderer's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockFrame {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BlockFrame {
    pub const NONE: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(width: f32) -> Self {
        Self::new(width, width, width, width)
    }

    pub fn is_visible(&self) -> bool {
        self.top > 0.0 || self.right > 0.0 || self.bottom > 0.0 || self.left > 0.0
    }

    /// The spatial inset the frame lines consume.
    pub fn insets(&self) -> Insets {
        Insets::new(self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_insets_match_line_widths() {
        let frame = BlockFrame::new(1.0, 2.0, 3.0, 4.0);
        assert!(frame.is_visible());
        let insets = frame.insets();
        assert_eq!(insets.trim_width(100.0), 94.0);
        assert_eq!(insets.trim_height(100.0), 96.0);
    }

    #[test]
    fn none_frame_is_invisible_and_inert() {
        assert!(!BlockFrame::NONE.is_visible());
        assert_eq!(BlockFrame::NONE.insets().trim_width(50.0), 50.0);
    }
}
