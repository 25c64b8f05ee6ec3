//! Page geometry for the letter PDF.
//!
//! All lengths are PDF points (1/72 inch). Wrapping is by character count, not font
//! metrics: 90 columns of 11pt Helvetica fit comfortably inside the A4 text block.

use serde::{Deserialize, Serialize};

/// A4 width in points (210mm).
pub const A4_WIDTH_PT: f32 = 595.2756;
/// A4 height in points (297mm).
pub const A4_HEIGHT_PT: f32 = 841.8898;

/// Layout parameters for letter pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    /// Applied on every side; text starts at x = margin.
    pub margin_pt: f32,
    /// Vertical advance per line.
    pub line_height_pt: f32,
    /// Extra space kept clear above the bottom margin.
    pub bottom_reserve_pt: f32,
    /// Maximum characters per wrapped line.
    pub wrap_columns: usize,
    pub font_size_pt: f32,
}

impl Default for PageGeometry {
    /// A4, 50pt margins, Helvetica 11pt on a 14pt line, 40pt footer reserve, 90 columns.
    fn default() -> Self {
        Self {
            width_pt: A4_WIDTH_PT,
            height_pt: A4_HEIGHT_PT,
            margin_pt: 50.0,
            line_height_pt: 14.0,
            bottom_reserve_pt: 40.0,
            wrap_columns: 90,
            font_size_pt: 11.0,
        }
    }
}

impl PageGeometry {
    /// Cursor position at the top of a fresh page.
    pub fn top_y(&self) -> f32 {
        self.height_pt - self.margin_pt
    }

    /// Lines may not be placed below this y.
    pub fn bottom_threshold(&self) -> f32 {
        self.margin_pt + self.bottom_reserve_pt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_sanity() {
        let g = PageGeometry::default();
        assert!((g.top_y() - 791.8898).abs() < 1e-3);
        assert_eq!(g.bottom_threshold(), 90.0);
        assert_eq!(g.wrap_columns, 90);
        assert!(g.top_y() > g.bottom_threshold());
    }
}
