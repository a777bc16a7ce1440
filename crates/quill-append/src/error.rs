use thiserror::Error;

/// Errors from the append workflow.
#[derive(Debug, Error)]
pub enum AppendError {
    /// Blob store failure (existence check, download, or upload).
    #[error("blob store error: {0}")]
    Blob(#[from] quill_blob::BlobError),

    /// The downloaded blob is not a usable Word document.
    #[error("document error: {0}")]
    Document(#[from] quill_docx::DocxError),

    /// Local filesystem failure (file-based variant only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for append operations.
pub type AppendResult<T> = Result<T, AppendError>;
