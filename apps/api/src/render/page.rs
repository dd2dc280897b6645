//! Page geometry and line placement for the PDF renderer.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner. Lines are never
//! wrapped: a line wider than the page simply runs past the right margin.

use serde::{Deserialize, Serialize};

/// A4 in points.
pub const A4_WIDTH_PT: f64 = 595.275_590_551_181_1;
pub const A4_HEIGHT_PT: f64 = 841.889_763_779_527_6;

/// Fixed layout parameters for a text page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_pt: f64,
    pub height_pt: f64,
    /// Distance from the top edge to the first baseline.
    pub margin_top_pt: f64,
    /// A page ends once the cursor drops below this height.
    pub margin_bottom_pt: f64,
    /// Left edge of every line.
    pub left_pt: f64,
    pub line_height_pt: f64,
    pub font_size_pt: f64,
}

/// A4 portrait, 40pt margins, 12pt Helvetica on a 14pt line pitch.
pub fn a4_page_geometry() -> PageGeometry {
    PageGeometry {
        width_pt: A4_WIDTH_PT,
        height_pt: A4_HEIGHT_PT,
        margin_top_pt: 40.0,
        margin_bottom_pt: 40.0,
        left_pt: 40.0,
        line_height_pt: 14.0,
        font_size_pt: 12.0,
    }
}

/// One line's position on its page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLine {
    pub line_index: usize,
    pub x_pt: f64,
    pub y_pt: f64,
}

impl PageGeometry {
    fn first_baseline(&self) -> f64 {
        self.height_pt - self.margin_top_pt
    }

    /// How many lines fit on one page before a break.
    ///
    /// The cursor is checked after each line is drawn, so the count is one more than the
    /// number of whole line pitches between the first baseline and the bottom margin.
    pub fn lines_per_page(&self) -> usize {
        let drawable = self.first_baseline() - self.margin_bottom_pt;
        if drawable < 0.0 || self.line_height_pt <= 0.0 {
            return 1;
        }
        (drawable / self.line_height_pt).floor() as usize + 1
    }

    /// Places `line_count` lines top-down, starting a new page whenever the cursor passes
    /// the bottom margin. A page is only opened when a line needs it, so a document that
    /// exactly fills its last page gets no trailing blank page. Zero lines still produce
    /// one empty page.
    pub fn layout(&self, line_count: usize) -> Vec<Vec<PlacedLine>> {
        let per_page = self.lines_per_page();
        let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];

        for line_index in 0..line_count {
            let slot = pages.last().map(Vec::len).unwrap_or(0);
            let slot = if slot == per_page {
                pages.push(Vec::new());
                0
            } else {
                slot
            };

            let y_pt = self.first_baseline() - self.line_height_pt * slot as f64;
            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine {
                    line_index,
                    x_pt: self.left_pt,
                    y_pt,
                });
            }
        }

        pages
    }
}
