use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{BlobError, BlobResult};

/// A validated capability URI addressing one blob.
///
/// The query string usually embeds a write-capable access token, so the
/// `Display` form strips it; use [`BlobUri::as_str`] only when the full
/// capability is actually needed (i.e. to make the request).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlobUri(Url);

impl BlobUri {
    /// Parse and validate a capability URI. Only http and https are
    /// accepted.
    pub fn parse(s: &str) -> BlobResult<Self> {
        let url = Url::parse(s).map_err(|e| BlobError::InvalidUri(format!("{s}: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(BlobError::InvalidUri(format!(
                "unsupported scheme {other:?}"
            ))),
        }
    }

    /// The full URI including any capability token.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// The URI with the query (capability token) removed, safe for logs
    /// and error messages.
    pub fn redacted(&self) -> String {
        let mut url = self.0.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.into()
    }
}

impl fmt::Display for BlobUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl FromStr for BlobUri {
    type Err = BlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
