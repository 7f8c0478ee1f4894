// src/generator/stats.rs

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::CaveGrid;

/// Summary of one generation run.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Wall-clock generation time in seconds.
    pub generation_time: f64,
    pub width: usize,
    pub height: usize,
    pub smooth_passes: u32,
    pub wall_count: usize,
    pub open_count: usize,
    /// Fraction of cells that ended up as walls.
    pub wall_ratio: f64,
}

impl GenerationStats {
    /// Tallies a finished grid. Counting is read-only and data-parallel.
    pub fn from_grid(grid: &CaveGrid, generation_time: f64, smooth_passes: u32) -> Self {
        let wall_count = grid.cells().par_iter().filter(|cell| cell.is_wall()).count();
        let total = grid.cells().len();
        Self {
            generation_time,
            width: grid.width(),
            height: grid.height(),
            smooth_passes,
            wall_count,
            open_count: total - wall_count,
            wall_ratio: wall_count as f64 / total as f64,
        }
    }
}
