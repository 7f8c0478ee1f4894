// src/grid/cell.rs

use serde::{Deserialize, Serialize};

/// One grid position: open floor or solid wall.
///
/// A two-state enum rather than a raw integer, so there is no sign or
/// encoding ambiguity anywhere in the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Seeding rule: a single uniform draw in [0, 1) compared against the
    /// configured wall probability.
    pub fn from_wall_draw(draw: f64, fill_probability: f64) -> Self {
        if draw < fill_probability {
            Cell::Wall
        } else {
            Cell::Open
        }
    }

    /// Returns a user-friendly name for the cell state.
    pub fn name(&self) -> &'static str {
        match self {
            Cell::Open => "Open",
            Cell::Wall => "Wall",
        }
    }
}
