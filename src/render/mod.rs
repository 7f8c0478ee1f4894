// src/render/mod.rs

use serde::{Deserialize, Serialize};

use crate::grid::{CaveGrid, Cell};

/// Glyph-to-state mapping used when dumping a grid as text.
///
/// The mapping is a caller choice rather than a hard-coded pair, so the same
/// grid can be dumped as `#`/`.`, ` `/`#`, or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphMap {
    pub wall: char,
    pub open: char,
}

impl GlyphMap {
    pub fn new(wall: char, open: char) -> Self {
        Self { wall, open }
    }

    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Wall => self.wall,
            Cell::Open => self.open,
        }
    }
}

impl Default for GlyphMap {
    /// `#` for walls, `.` for open floor.
    fn default() -> Self {
        Self::new('#', '.')
    }
}

/// Renders the grid as `width` lines of `height` characters each, one line
/// per x in storage order.
pub fn render_lines(grid: &CaveGrid, glyphs: &GlyphMap) -> Vec<String> {
    (0..grid.width())
        .map(|x| {
            (0..grid.height())
                .map(|y| glyphs.glyph(grid.cell_at(x, y)))
                .collect()
        })
        .collect()
}

/// Renders the grid as a single newline-joined string.
pub fn render_string(grid: &CaveGrid, glyphs: &GlyphMap) -> String {
    render_lines(grid, glyphs).join("\n")
}
