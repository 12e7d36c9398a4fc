//! Error types for lodestone-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lodestone-core
#[derive(Debug, Error)]
pub enum Error {
    /// Sheet store root is missing or unreadable
    #[error("failed to open sheet store at '{path}': {message}")]
    StoreOpen { path: PathBuf, message: String },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Row with an unparsable identifier
    #[error("invalid row id '{value}' in '{path}'")]
    InvalidRowId { value: String, path: PathBuf },

    /// Directory traversal error
    #[error("failed to traverse store directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Unknown table kind name
    #[error("unknown table kind '{0}'")]
    UnknownTable(String),

    /// Failed to encode a table into the binary schema
    #[error("failed to encode table: {0}")]
    Encode(#[from] bincode::Error),

    /// Failed to decode a written table file
    #[error("failed to decode table '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// Failed to build the merge worker pool
    #[error("failed to build merge worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
