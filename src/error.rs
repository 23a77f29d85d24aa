//! Error type shared by the crate.
//!
//! Drawing never fails: bad geometry is dropped silently. Only construction,
//! grid indexing and config I/O report errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid buffer dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid grid {cols}x{rows}: needs at least one column and one row")]
    InvalidGrid { cols: usize, rows: usize },

    #[error("cell size {width}x{height} cannot index a grid")]
    ZeroCellSize { width: f32, height: f32 },

    #[error("invalid scene config: {0}")]
    Config(String),

    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RasterError>;
