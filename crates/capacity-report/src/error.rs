// File: crates/capacity-report/src/error.rs
// Summary: Report error taxonomy; every failure is fatal for the run.

use std::path::PathBuf;

use chart_core::ChartError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An output or config path could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chart construction rejected the data (mismatched lengths, bad pie values, ...).
    #[error("render error: {0}")]
    Render(#[source] ChartError),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("writing CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("writing summary: {0}")]
    Stdout(#[source] std::io::Error),
}

impl From<ChartError> for ReportError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::Io { path, source } => ReportError::Io { path, source },
            other => ReportError::Render(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
