use std::sync::Arc;

use tokio::net::TcpListener;

use quill_blob::BlobStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// The quill HTTP server.
pub struct QuillServer {
    config: ServerConfig,
    store: Arc<dyn BlobStore>,
}

impl QuillServer {
    pub fn new(config: ServerConfig, store: Arc<dyn BlobStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState {
            store: Arc::clone(&self.store),
            config: Arc::new(self.config.clone()),
        })
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("quill server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
