//! Shared types for quill.
//!
//! This crate defines the transient value types exchanged over the HTTP
//! surface: the append request body, the AI-plugin manifest, and the
//! endpoint paths. Every other quill crate that touches the wire depends
//! on `quill-types`.

pub mod endpoint;
pub mod manifest;
pub mod request;

pub use endpoint::{endpoints, HealthResponse};
pub use manifest::{ManifestApi, ManifestAuth, PluginManifest};
pub use request::AppendRequest;
