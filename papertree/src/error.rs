//! Error types for loading tree documents.
//!
//! Tree operations themselves never fail; only reading host input can.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaperTreeError>;

#[derive(Debug, Error)]
pub enum PaperTreeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color '{0}'")]
    InvalidColor(String),
}
