use std::path::PathBuf;

use shared::ObjectId;
use thiserror::Error;

/// Failures surfaced by editor operations
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("An object with id '{0}' already exists")]
    DuplicateId(ObjectId),
    #[error("No object with id '{0}'")]
    NotFound(ObjectId),
    #[error("{0}")]
    Validation(String),
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditorError {
    /// Short title for user-facing notifications
    pub fn title(&self) -> &'static str {
        match self {
            EditorError::DuplicateId(_) => "Duplicate Object",
            EditorError::NotFound(_) => "Object Not Found",
            EditorError::Validation(_) => "Invalid Input",
            EditorError::Io { .. } => "Upload Failed",
        }
    }
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
