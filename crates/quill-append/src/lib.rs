//! Document append workflow.
//!
//! The one piece of orchestration in quill: make sure a Word document
//! exists at a blob URI, then append a paragraph of text to it. The blob
//! is rewritten whole on every append; see [`workflow`] for why.

pub mod error;
pub mod local;
pub mod workflow;

pub use error::{AppendError, AppendResult};
pub use local::append_content_to_file;
pub use workflow::append_content_to_blob;
