use serde::{Deserialize, Serialize};

/// AI-plugin manifest served at `/.well-known/ai-plugin.json`.
///
/// Everything except `api.url` is static; the URL is filled in per request
/// from the caller's own scheme/host/port so the advertised OpenAPI
/// document resolves no matter how the service is reached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PluginManifest {
    pub schema_version: String,
    pub name_for_model: String,
    pub name_for_human: String,
    pub description_for_model: String,
    pub description_for_human: String,
    pub auth: ManifestAuth,
    pub api: ManifestApi,
    pub contact_email: String,
    pub logo_url: String,
    pub legal_info_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestAuth {
    #[serde(rename = "type")]
    pub auth_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestApi {
    #[serde(rename = "type")]
    pub api_type: String,
    pub url: String,
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            schema_version: "v1".into(),
            name_for_model: "worddoc".into(),
            name_for_human: "worddoc".into(),
            description_for_model: "Creates or appends content to a Microsoft Word document"
                .into(),
            description_for_human: "Creates or appends to a Word document".into(),
            auth: ManifestAuth {
                auth_type: "none".into(),
            },
            api: ManifestApi {
                api_type: "openapi".into(),
                url: String::new(),
            },
            contact_email: String::new(),
            logo_url: String::new(),
            legal_info_url: String::new(),
        }
    }
}

impl PluginManifest {
    /// Manifest pointing at the given OpenAPI document URL.
    pub fn with_api_url(url: impl Into<String>) -> Self {
        let mut manifest = Self::default();
        manifest.api.url = url.into();
        manifest
    }
}
