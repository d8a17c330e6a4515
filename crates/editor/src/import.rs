//! Model file upload: extension check and asynchronous byte read

use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

/// Suffixes accepted by the upload field (compared case-insensitively)
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".glb", ".gltf"];

/// Raw bytes of a model file read from disk
#[derive(Debug, Clone)]
pub struct ModelUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ModelUpload {
    /// Object name derived from the file name: everything before the first dot
    pub fn display_name(&self) -> Option<&str> {
        self.file_name
            .split('.')
            .next()
            .filter(|stem| !stem.is_empty())
    }
}

/// File name component of `path`, lossily converted
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reject files that are not `.glb` / `.gltf`
pub fn validate_file_name(file_name: &str) -> Result<()> {
    let lower = file_name.to_ascii_lowercase();
    let accepted = ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext));

    if accepted {
        Ok(())
    } else {
        Err(EditorError::Validation(format!(
            "Invalid file type '{file_name}'. Please upload a .glb or .gltf file."
        )))
    }
}

/// Validate and read a model file.
///
/// The returned future owns everything it needs, so it can be spawned while
/// the editor keeps handling other actions.
pub async fn read_model_file(path: PathBuf) -> Result<ModelUpload> {
    let file_name = file_name_of(&path);
    validate_file_name(&file_name)?;

    tracing::debug!("Reading model file {}", path.display());
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| EditorError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(ModelUpload { file_name, bytes })
}
