//! Wordprocessing (OOXML) document codec.
//!
//! A `.docx` file is a zip container of XML parts. This crate opens such a
//! container fully in memory, appends plain-text paragraphs to the end of
//! the document body, and serializes the container back to bytes. Parts
//! other than the main document part pass through untouched.
//!
//! The codec deliberately knows nothing about storage; `quill-append`
//! combines it with a blob store.

mod body;
pub mod document;
pub mod error;

pub use document::WordDocument;
pub use error::{DocxError, DocxResult};
