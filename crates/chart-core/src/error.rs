// File: crates/chart-core/src/error.rs
// Summary: Error type for chart construction and rendering failures.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Two parallel data arrays of a series disagree in length.
    #[error("series '{series}': expected {expected} values, got {actual}")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid pie data: {0}")]
    InvalidPie(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("figure layout: {0}")]
    Layout(String),

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
