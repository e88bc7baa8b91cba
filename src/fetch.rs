//! Outbound fetch of the target URL.
//!
//! One `GET`, whole body buffered, no timeout. Everything that can go wrong
//! collapses into [`FetchError`], whose `Display` text is what the caller
//! sees in the `error` field of the failure response.

use std::error::Error as StdError;

use bytes::Bytes;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use thiserror::Error;
use url::Url;

use crate::error::Error;

/// MIME type reported when upstream sends none, or one that does not parse.
pub const DEFAULT_MIME: &str = "text/plain";

/// A successfully fetched upstream response.
#[derive(Debug)]
pub struct Upstream {
    pub status: StatusCode,
    /// Bare MIME type, parameters stripped: `text/html`, never `text/html; charset=utf-8`.
    pub content_type: String,
    pub body: Bytes,
}

/// Any failure while resolving, connecting to, or reading from the target.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("unknown url type: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP Error {}: {}", .0.as_u16(), .0.canonical_reason().unwrap_or("Unknown"))]
    Status(StatusCode),

    #[error("{}", describe(.0))]
    Transport(reqwest::Error),
}

/// Shared outbound HTTP client. Cloning is cheap: clones share one pool.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// A fetcher with the client defaults: redirects followed, system proxy
    /// settings honoured, no timeout.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, target: &str) -> Result<Upstream, FetchError> {
        let url = Url::parse(target).map_err(|source| FetchError::InvalidUrl {
            url: target.to_owned(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_owned()));
        }

        let response = self.client.get(url).send().await.map_err(FetchError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = mime_type(
            response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        );
        let body = response.bytes().await.map_err(FetchError::Transport)?;

        Ok(Upstream { status, content_type, body })
    }
}

/// Reduces a `Content-Type` header value to its lower-cased `type/subtype`.
///
/// Falls back to [`DEFAULT_MIME`] when the header is absent or the value
/// does not contain exactly one `/`.
pub fn mime_type(header: Option<&str>) -> String {
    let Some(value) = header else {
        return DEFAULT_MIME.to_owned();
    };
    let bare = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    if bare.matches('/').count() == 1 {
        bare
    } else {
        DEFAULT_MIME.to_owned()
    }
}

/// Renders an error followed by its source chain, so the root cause
/// (`Connection refused`, `dns error`, ...) survives into the description.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
