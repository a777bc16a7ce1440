//! Blob store client for quill.
//!
//! Blobs are addressed by a capability URI: a plain http(s) URL whose query
//! string carries whatever token the storage provider embeds to grant read
//! and write access. This crate never interprets the token; it only makes
//! sure it is not echoed into logs.
//!
//! Two backends: [`HttpBlobStore`] for real object storage and
//! [`InMemoryBlobStore`] for tests and embedding.

pub mod error;
pub mod http;
pub mod memory;
pub mod traits;
pub mod uri;

pub use error::{BlobError, BlobResult};
pub use http::HttpBlobStore;
pub use memory::InMemoryBlobStore;
pub use traits::BlobStore;
pub use uri::BlobUri;
