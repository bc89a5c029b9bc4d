//! Error types for phone-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in phone-core
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist or cannot be opened
    #[error("file '{path}' not found: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but does not form a valid table
    #[error("failed to load table '{path}': {message}")]
    Load { path: PathBuf, message: String },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Not enough distinct phone numbers could be drawn
    #[error(
        "could only generate {produced} of {requested} unique phone numbers after {attempts} draws"
    )]
    GenerationExhausted {
        requested: usize,
        produced: usize,
        attempts: u64,
    },

    /// Column values do not line up with the table rows
    #[error("column '{column}' needs {expected} values, got {found}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// String is not a valid 10-digit phone number
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    /// Output suffix would overwrite the input or leave its directory
    #[error("invalid output suffix '{0}': must be non-empty and contain no path separators")]
    InvalidSuffix(String),

    /// Failed to write the output table
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for failures that happened while parsing an existing file
    pub fn is_load_error(&self) -> bool {
        matches!(self, Error::Load { .. } | Error::Csv { .. })
    }

    /// True when the input file could not be found or opened
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
