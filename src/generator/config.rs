// src/generator/config.rs

use serde::{Deserialize, Serialize};

use crate::generator::GridError;

/// How the generator's random stream is seeded.
///
/// Both modes drive the identical seeding algorithm (one uniform draw per
/// cell compared against the fill probability); they differ only in where
/// the seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RngMode {
    /// Deterministic stream from a caller-supplied seed. Identical seeds
    /// reproduce identical grids, tie-break draws included.
    Seeded(u64),
    /// Fresh OS-entropy stream on every run.
    FromEntropy,
}

/// Parameters for one cave generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub width: i32,
    pub height: i32,
    /// Probability that a cell is seeded as a wall, in [0.0, 1.0].
    pub fill_probability: f64,
    /// Number of smoothing iterations applied after seeding.
    pub smooth_passes: i32,
    pub rng_mode: RngMode,
}

impl GeneratorConfig {
    /// Checks the constructor-time validation rules. The generator refuses
    /// to allocate anything from a config that fails here.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(GridError::InvalidProbability(self.fill_probability));
        }
        if self.smooth_passes < 0 {
            return Err(GridError::InvalidPassCount(self.smooth_passes));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// A 10x10 grid, the historical default size, with a moderate wall
    /// density and enough passes for the cave structure to settle.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            fill_probability: 0.45,
            smooth_passes: 4,
            rng_mode: RngMode::FromEntropy,
        }
    }
}
