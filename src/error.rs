use thiserror::Error;

/// Reasons a sample grid cannot be built
#[derive(Debug, Error, PartialEq)]
pub enum RasterError {
    #[error("grid must have at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: usize, rows: usize },

    #[error("grid step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("grid origin must be finite, got ({x}, {y})")]
    NonFiniteOrigin { x: f64, y: f64 },

    #[error("a {width}x{height} area cannot be sampled with step {step}")]
    GridTooLarge { width: f64, height: f64, step: f64 },
}
