use axum::extract::{Host, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use bytes::Bytes;

use quill_append::append_content_to_blob;
use quill_blob::BlobUri;
use quill_types::{AppendRequest, HealthResponse, PluginManifest};

use crate::error::ApiError;
use crate::openapi;
use crate::router::AppState;

/// Serve the AI-plugin manifest, pointing `api.url` back at this server
/// as the caller reached it.
pub async fn manifest_handler(
    State(state): State<AppState>,
    Host(host): Host,
    headers: HeaderMap,
) -> Json<PluginManifest> {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    let mut manifest = PluginManifest::with_api_url(api_url(scheme, &host));
    manifest.contact_email = state.config.contact_email.clone();
    manifest.logo_url = state.config.logo_url.clone();
    manifest.legal_info_url = state.config.legal_info_url.clone();
    Json(manifest)
}

/// `{scheme}://{host}:{port}/swagger.json`, defaulting the port by scheme
/// when the Host header does not carry one.
fn api_url(scheme: &str, host: &str) -> String {
    // A port is present when something follows the last ':' outside an
    // IPv6 bracket.
    let has_port = match host.rfind(':') {
        Some(idx) => !host[idx..].contains(']'),
        None => false,
    };
    if has_port {
        format!("{scheme}://{host}/swagger.json")
    } else {
        let port = if scheme == "https" { 443 } else { 80 };
        format!("{scheme}://{host}:{port}/swagger.json")
    }
}

/// Append the posted content to the addressed document blob.
pub async fn append_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    tracing::info!("beginning to append content to blob");

    let request: AppendRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))?;

    if request.writeable_blob_uri.trim().is_empty() {
        return Err(ApiError::BadRequest("WriteableBlobUri is required.".into()));
    }
    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Content is required.".into()));
    }

    let uri = BlobUri::parse(&request.writeable_blob_uri)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    append_content_to_blob(state.store.as_ref(), &uri, &request.content).await?;

    tracing::info!("content was appended to blob");
    Ok(StatusCode::CREATED)
}

/// OpenAPI description advertised by the manifest.
pub async fn openapi_handler() -> Json<serde_json::Value> {
    Json(openapi::document())
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
