use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::{BlobError, BlobResult};
use crate::traits::BlobStore;
use crate::uri::BlobUri;

/// User-Agent string for blob requests.
const USER_AGENT: &str = concat!("quill/", env!("CARGO_PKG_VERSION"));

/// Azure block blobs require this header on PUT; other object stores
/// ignore it.
const BLOB_TYPE_HEADER: (&str, &str) = ("x-ms-blob-type", "BlockBlob");

/// Content type stored alongside the uploaded document.
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Blob store over plain HTTP: HEAD for existence, GET for download, PUT
/// for a full overwrite. Authorization rides in the capability URI itself,
/// so no credential handling happens here.
pub struct HttpBlobStore {
    client: Client,
}

impl HttpBlobStore {
    /// Build a store with a bounded-timeout HTTP client.
    pub fn new() -> BlobResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }

    /// Build a store around an existing client (shared pools, test
    /// configuration).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn exists(&self, uri: &BlobUri) -> BlobResult<bool> {
        let response = self.client.head(uri.as_url().clone()).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(BlobError::Status {
                op: "exists",
                status: status.as_u16(),
            }),
        }
    }

    async fn download(&self, uri: &BlobUri) -> BlobResult<Vec<u8>> {
        tracing::debug!(blob = %uri, "downloading blob");
        let response = self.client.get(uri.as_url().clone()).send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.bytes().await?.to_vec()),
            StatusCode::NOT_FOUND => Err(BlobError::NotFound(uri.redacted())),
            status => Err(BlobError::Status {
                op: "download",
                status: status.as_u16(),
            }),
        }
    }

    async fn upload(&self, uri: &BlobUri, bytes: &[u8]) -> BlobResult<()> {
        tracing::debug!(blob = %uri, size = bytes.len(), "uploading blob");
        let response = self
            .client
            .put(uri.as_url().clone())
            .header(BLOB_TYPE_HEADER.0, BLOB_TYPE_HEADER.1)
            .header(reqwest::header::CONTENT_TYPE, DOCX_CONTENT_TYPE)
            .body(bytes.to_vec())
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BlobError::Status {
                op: "upload",
                status: status.as_u16(),
            })
        }
    }
}
