// src/lib.rs

pub mod generator;
pub mod grid;
pub mod render;
pub mod utils;

pub use generator::{CaveGenerator, GenerationStats, GeneratorConfig, GridError, RngMode};
pub use grid::{CaveGrid, Cell};
pub use render::GlyphMap;
