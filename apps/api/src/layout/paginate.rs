//! Letter Paginator — flows wrapped letter text across fixed-size pages.
//!
//! # Placement rules
//! - The cursor starts at `top_y()` on each page.
//! - Each sub-line first advances the cursor down one line height.
//! - If that lands below `bottom_threshold()`, a new page starts and the line is
//!   placed at `top_y()` of the new page instead.
//! - Every line sits at x = margin.

use serde::Serialize;

use crate::layout::geometry::PageGeometry;
use crate::layout::wrap::wrap_text;

/// One drawn line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Pages in order, each with its lines in drawing order. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// Lays out `text` on pages described by `geometry`.
///
/// Empty text yields a single blank page.
pub fn paginate(text: &str, geometry: &PageGeometry) -> PaginatedDocument {
    let mut pages = vec![Page::default()];
    let mut y = geometry.top_y();

    for sub_line in wrap_text(text, geometry.wrap_columns) {
        y -= geometry.line_height_pt;
        if y < geometry.bottom_threshold() {
            pages.push(Page::default());
            y = geometry.top_y();
        }

        // `pages` always holds at least the first page.
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine {
                text: sub_line,
                x: geometry.margin_pt,
                y,
            });
        }
    }

    PaginatedDocument {
        geometry: geometry.clone(),
        pages,
    }
}
