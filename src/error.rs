//! Error types for the ifc-header-gen crate.

use std::path::PathBuf;

/// Errors that can occur while generating IFC headers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read the dictionary file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dictionary is not valid JSON or has the wrong shape.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to create the output folder or write a generated header.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
