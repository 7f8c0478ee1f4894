// src/generator/error.rs

use thiserror::Error;

/// Constructor-time validation failures.
///
/// Generation either fully succeeds or fails with one of these before any
/// grid is allocated; no partially-initialized grid is ever observable.
/// Smoothing itself has no error path: neighbor lookups are in-bounds by
/// construction, not guarded at runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("invalid fill probability {0}: must lie within [0.0, 1.0]")]
    InvalidProbability(f64),

    #[error("invalid smoothing pass count {0}: must be non-negative")]
    InvalidPassCount(i32),
}
