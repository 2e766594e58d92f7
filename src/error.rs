//! Error types for support-triage.
//!
//! The enrichment pipeline is total and has no error type of its own.
//! Failures only surface at the edges: reading source data and config.

use std::path::PathBuf;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Source-data errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed row {row}: {source}")]
    MalformedRow {
        row: u64,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
