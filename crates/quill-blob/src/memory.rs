use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{BlobError, BlobResult};
use crate::traits::BlobStore;
use crate::uri::BlobUri;

/// In-memory, HashMap-based blob store.
///
/// Intended for tests and embedding. Blobs are keyed by the full URI
/// string behind a `RwLock`; bytes are cloned on read and write.
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of blobs currently stored.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    /// Remove all blobs from the store.
    pub fn clear(&self) {
        self.blobs.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn exists(&self, uri: &BlobUri) -> BlobResult<bool> {
        let map = self.blobs.read().expect("lock poisoned");
        Ok(map.contains_key(uri.as_str()))
    }

    async fn download(&self, uri: &BlobUri) -> BlobResult<Vec<u8>> {
        let map = self.blobs.read().expect("lock poisoned");
        map.get(uri.as_str())
            .cloned()
            .ok_or_else(|| BlobError::NotFound(uri.redacted()))
    }

    async fn upload(&self, uri: &BlobUri, bytes: &[u8]) -> BlobResult<()> {
        let mut map = self.blobs.write().expect("lock poisoned");
        map.insert(uri.as_str().to_string(), bytes.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobStore")
            .field("blob_count", &self.len())
            .finish()
    }
}
