//! Read-modify-write with full overwrite.
//!
//! Object stores expose no append primitive that composes with a zipped
//! XML container, so every append downloads the whole blob, mutates the
//! document in memory, and uploads the result over the old contents. The
//! cost scales with document size, and two writers racing on the same URI
//! resolve as last-write-wins. Callers needing stronger guarantees must
//! serialize their own writes or add a conditional-upload (ETag) backend.

use quill_blob::{BlobStore, BlobUri};
use quill_docx::WordDocument;

use crate::error::AppendResult;

/// Append `content` as one paragraph to the Word document stored at
/// `uri`, creating a fresh empty document first when the blob is absent.
///
/// The five steps run strictly in order: existence check, download,
/// parse/append, serialize, upload. Nothing is retried; retrying the
/// final upload blindly could double-append if the first attempt landed.
pub async fn append_content_to_blob(
    store: &dyn BlobStore,
    uri: &BlobUri,
    content: &str,
) -> AppendResult<()> {
    create_blob_if_absent(store, uri).await?;

    // Whole-document scratch buffer; freed on every exit path.
    let downloaded = store.download(uri).await?;

    let mut document = WordDocument::from_bytes(&downloaded)?;
    document.append_paragraph(content)?;
    let updated = document.to_bytes()?;

    store.upload(uri, &updated).await?;
    tracing::info!(blob = %uri, bytes = updated.len(), "appended paragraph to blob");
    Ok(())
}

/// Establish the invariant that the addressed blob holds a valid document
/// with at least an empty body.
///
/// Concurrent creators racing on a new URI may both run this; the blob
/// ends up as someone's empty document either way.
async fn create_blob_if_absent(store: &dyn BlobStore, uri: &BlobUri) -> AppendResult<()> {
    if store.exists(uri).await? {
        return Ok(());
    }
    tracing::info!(blob = %uri, "blob absent, creating empty document");
    let empty = WordDocument::empty().to_bytes()?;
    store.upload(uri, &empty).await?;
    Ok(())
}
