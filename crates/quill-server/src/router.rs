use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use quill_blob::BlobStore;
use quill_types::endpoints;

use crate::config::ServerConfig;
use crate::handler;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlobStore>,
    pub config: Arc<ServerConfig>,
}

/// Build the axum router with all quill endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::MANIFEST, get(handler::manifest_handler))
        .route(endpoints::APPEND_DOC, post(handler::append_handler))
        .route(endpoints::OPENAPI, get(handler::openapi_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
