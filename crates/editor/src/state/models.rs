//! Ownership of uploaded model bytes

use std::collections::{HashMap, HashSet};

use shared::BlobId;

/// Bytes of one uploaded model file
#[derive(Debug, Clone)]
pub struct ModelBlob {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Holds every uploaded model that some history snapshot may still render.
///
/// Each blob is released exactly once: when the last snapshot referencing it
/// is discarded, or when the registry is dropped.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    blobs: HashMap<BlobId, ModelBlob>,
    released: usize,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of uploaded bytes and hand out a fresh handle
    pub fn insert(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> BlobId {
        let id = BlobId(format!("blob:{}", uuid::Uuid::new_v4()));
        let blob = ModelBlob {
            file_name: file_name.into(),
            bytes,
        };
        tracing::debug!("Registered model blob {id} ({} bytes)", blob.bytes.len());
        self.blobs.insert(id.clone(), blob);
        id
    }

    pub fn get(&self, id: &BlobId) -> Option<&ModelBlob> {
        self.blobs.get(id)
    }

    pub fn contains(&self, id: &BlobId) -> bool {
        self.blobs.contains_key(id)
    }

    /// Number of live blobs
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Number of blobs released so far
    pub fn released_count(&self) -> usize {
        self.released
    }

    /// Release every blob not in `referenced`. Returns the released handles.
    pub fn release_unreferenced(&mut self, referenced: &HashSet<&BlobId>) -> Vec<BlobId> {
        let stale: Vec<BlobId> = self
            .blobs
            .keys()
            .filter(|id| !referenced.contains(id))
            .cloned()
            .collect();
        for id in &stale {
            self.release(id);
        }
        stale
    }

    /// Release everything (session teardown)
    pub fn release_all(&mut self) -> Vec<BlobId> {
        let all: Vec<BlobId> = self.blobs.keys().cloned().collect();
        for id in &all {
            self.release(id);
        }
        all
    }

    fn release(&mut self, id: &BlobId) {
        if let Some(blob) = self.blobs.remove(id) {
            self.released += 1;
            tracing::debug!("Released model blob {id} ({})", blob.file_name);
        }
    }
}

impl Drop for ModelRegistry {
    fn drop(&mut self) {
        if !self.blobs.is_empty() {
            tracing::debug!("Releasing {} model blob(s) on teardown", self.blobs.len());
            self.release_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut reg = ModelRegistry::new();
        let id = reg.insert("duck.glb", vec![1, 2, 3]);
        assert!(id.0.starts_with("blob:"));
        assert_eq!(reg.get(&id).map(|b| b.bytes.len()), Some(3));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_release_unreferenced_only() {
        let mut reg = ModelRegistry::new();
        let keep = reg.insert("a.glb", vec![0]);
        let stale = reg.insert("b.glb", vec![0]);

        let referenced: HashSet<&BlobId> = [&keep].into_iter().collect();
        let released = reg.release_unreferenced(&referenced);
        assert_eq!(released, vec![stale.clone()]);
        assert!(reg.contains(&keep));
        assert!(!reg.contains(&stale));
        assert_eq!(reg.released_count(), 1);

        // Second pass releases nothing new
        assert!(reg.release_unreferenced(&referenced).is_empty());
        assert_eq!(reg.released_count(), 1);
    }

    #[test]
    fn test_release_all_counts_once() {
        let mut reg = ModelRegistry::new();
        reg.insert("a.glb", vec![0]);
        reg.insert("b.gltf", vec![0]);
        assert_eq!(reg.release_all().len(), 2);
        assert!(reg.release_all().is_empty());
        assert_eq!(reg.released_count(), 2);
        assert!(reg.is_empty());
    }
}
