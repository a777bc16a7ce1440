use thiserror::Error;

/// Errors from blob store operations.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The blob URI is not a usable http(s) URL.
    #[error("invalid blob URI: {0}")]
    InvalidUri(String),

    /// The blob does not exist at the addressed location.
    #[error("blob not found: {0}")]
    NotFound(String),

    /// The store answered with an unexpected HTTP status.
    #[error("blob store returned status {status} during {op}")]
    Status { op: &'static str, status: u16 },

    /// Network or transport failure talking to the store.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// I/O error from a local backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for blob store operations.
pub type BlobResult<T> = Result<T, BlobError>;
