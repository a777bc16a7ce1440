//! HTTP server for quill.
//!
//! Exposes the AI-plugin manifest, the document append endpoint, the
//! OpenAPI description the manifest points at, and a health check. The
//! blob store backend is injected, so the whole surface is testable
//! against the in-memory store.

pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::QuillServer;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::util::ServiceExt;

    use quill_blob::{BlobStore, BlobUri, InMemoryBlobStore};
    use quill_docx::WordDocument;

    use super::*;

    fn test_app(store: Arc<InMemoryBlobStore>) -> Router {
        build_router(AppState {
            store,
            config: Arc::new(ServerConfig::default()),
        })
    }

    fn post_doc(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/doc")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn manifest_reflects_request_host() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/.well-known/ai-plugin.json")
                    .header(header::HOST, "plugin.example.com:7071")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let manifest = body_json(response).await;
        assert_eq!(
            manifest["api"]["url"],
            "http://plugin.example.com:7071/swagger.json"
        );
        assert_eq!(manifest["schema_version"], "v1");
        assert_eq!(manifest["auth"]["type"], "none");
    }

    #[tokio::test]
    async fn manifest_honors_forwarded_proto() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/.well-known/ai-plugin.json")
                    .header(header::HOST, "plugin.example.com")
                    .header("x-forwarded-proto", "https")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let manifest = body_json(response).await;
        assert_eq!(
            manifest["api"]["url"],
            "https://plugin.example.com:443/swagger.json"
        );
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/swagger.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let doc = body_json(response).await;
        assert!(doc["paths"]["/doc"]["post"].is_object());
    }

    #[tokio::test]
    async fn append_rejects_missing_blob_uri() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(post_doc(r#"{"content":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "WriteableBlobUri is required." })
        );
    }

    #[tokio::test]
    async fn append_rejects_blank_content_case_insensitively() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(post_doc(
                r#"{"writeableBlobUri":"https://x/blob","content":""}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Content is required." })
        );
    }

    #[tokio::test]
    async fn append_rejects_whitespace_only_fields() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(post_doc(
                r#"{"WriteableBlobUri":"   ","Content":"hello"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "WriteableBlobUri is required." })
        );
    }

    #[tokio::test]
    async fn append_rejects_malformed_json() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app.oneshot(post_doc("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("invalid request body"));
    }

    #[tokio::test]
    async fn append_rejects_unusable_uri() {
        let app = test_app(Arc::new(InMemoryBlobStore::new()));
        let response = app
            .oneshot(post_doc(
                r#"{"writeableBlobUri":"ftp://host/blob","content":"hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn append_creates_and_writes_document() {
        let store = Arc::new(InMemoryBlobStore::new());
        let app = test_app(Arc::clone(&store));

        let response = app
            .oneshot(post_doc(
                r#"{"WriteableBlobUri":"https://host/docs/d.docx?sig=s","Content":"hello world"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let uri = BlobUri::parse("https://host/docs/d.docx?sig=s").unwrap();
        let bytes = store.download(&uri).await.unwrap();
        let doc = WordDocument::from_bytes(&bytes).unwrap();
        assert_eq!(doc.paragraph_texts().unwrap(), vec!["hello world"]);
    }

    #[tokio::test]
    async fn appends_accumulate_in_order() {
        let store = Arc::new(InMemoryBlobStore::new());

        for content in ["A", "B"] {
            let app = test_app(Arc::clone(&store));
            let body =
                format!(r#"{{"writeableBlobUri":"https://host/docs/ab.docx","content":"{content}"}}"#);
            let response = app.oneshot(post_doc(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let uri = BlobUri::parse("https://host/docs/ab.docx").unwrap();
        let doc = WordDocument::from_bytes(&store.download(&uri).await.unwrap()).unwrap();
        assert_eq!(doc.paragraph_texts().unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn corrupt_blob_surfaces_as_server_error() {
        let store = Arc::new(InMemoryBlobStore::new());
        let uri = BlobUri::parse("https://host/docs/corrupt.docx").unwrap();
        store.upload(&uri, b"junk bytes").await.unwrap();

        let app = test_app(Arc::clone(&store));
        let response = app
            .oneshot(post_doc(
                r#"{"writeableBlobUri":"https://host/docs/corrupt.docx","content":"x"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // The stored bytes were not replaced by a half-written document.
        assert_eq!(store.download(&uri).await.unwrap(), b"junk bytes");
    }
}
