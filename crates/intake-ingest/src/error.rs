use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a form data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("form control not found: {0}")]
    MissingControl(String),
    #[error("form control {0} is not a text input")]
    NotText(String),
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read form document {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write form document {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid form document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
