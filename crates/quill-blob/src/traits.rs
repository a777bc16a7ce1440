use async_trait::async_trait;

use crate::error::BlobResult;
use crate::uri::BlobUri;

/// A store of opaque blobs addressed by capability URI.
///
/// All implementations must satisfy these invariants:
/// - `upload` is a full overwrite; partial writes are never observable.
/// - `download` returns the complete blob or fails; no truncation.
/// - `exists` makes no claim about the blob an instant later — callers
///   racing on the same URI get last-write-wins, nothing stronger.
/// - All I/O errors are propagated, never silently ignored.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Check whether a blob exists at the addressed location.
    async fn exists(&self, uri: &BlobUri) -> BlobResult<bool>;

    /// Download the entire blob.
    ///
    /// Returns [`crate::BlobError::NotFound`] when the blob is absent.
    async fn download(&self, uri: &BlobUri) -> BlobResult<Vec<u8>>;

    /// Upload `bytes` to the addressed location, replacing any previous
    /// contents in full.
    async fn upload(&self, uri: &BlobUri, bytes: &[u8]) -> BlobResult<()>;
}
