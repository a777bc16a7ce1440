/// HTTP endpoint paths exposed by the quill server.
pub mod endpoints {
    /// AI-plugin discovery manifest.
    pub const MANIFEST: &str = "/.well-known/ai-plugin.json";
    /// Append content to a document blob.
    pub const APPEND_DOC: &str = "/doc";
    /// OpenAPI description advertised by the manifest.
    pub const OPENAPI: &str = "/swagger.json";
    pub const HEALTH: &str = "/health";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
