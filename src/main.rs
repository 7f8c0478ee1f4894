#![warn(non_snake_case)]
//! # Cavegen Main Entry Point
//!
//! Cavegen generates organic cave-like maps for procedural levels by seeding a
//! random wall/open grid and smoothing it with a cellular-automata majority
//! rule. This binary is a thin console front end: it initializes logging,
//! reads optional positional arguments, runs one generation, and prints the
//! rendered grid to stdout.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;

use log::info;

use cavegen::render::render_string;
use cavegen::{CaveGenerator, GeneratorConfig, GlyphMap, RngMode};

/// Usage: `cavegen [width height [fill_probability [smooth_passes [seed]]]]`.
/// Anything omitted falls back to the defaults in [`GeneratorConfig`].
fn parse_args(mut config: GeneratorConfig) -> Result<GeneratorConfig, Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(width) = args.first() {
        config.width = width.parse()?;
    }
    if let Some(height) = args.get(1) {
        config.height = height.parse()?;
    }
    if let Some(fill) = args.get(2) {
        config.fill_probability = fill.parse()?;
    }
    if let Some(passes) = args.get(3) {
        config.smooth_passes = passes.parse()?;
    }
    if let Some(seed) = args.get(4) {
        config.rng_mode = RngMode::Seeded(seed.parse()?);
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("cavegen starting...");

    let config = parse_args(GeneratorConfig::default())?;
    let mut generator = CaveGenerator::new(config)?;
    let grid = generator.generate();

    println!("{}", render_string(&grid, &GlyphMap::default()));

    if let Some(stats) = generator.stats() {
        info!("run stats: {}", serde_json::to_string(stats)?);
    }

    info!("cavegen exiting.");
    Ok(())
}
