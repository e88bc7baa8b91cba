//! Incoming HTTP request type.

use http::Uri;
use http::request::Parts;

/// An incoming HTTP request.
///
/// Only the request target is kept. The relay forwards on the target alone,
/// so headers and body are never read.
pub struct Request {
    pub(crate) uri: Uri,
}

impl Request {
    pub(crate) fn new(parts: Parts) -> Self {
        Self { uri: parts.uri }
    }

    /// The request target exactly as it appeared on the request line,
    /// query string included: `/https://example.com/a?b=c`.
    pub fn path_and_query(&self) -> &str {
        self.uri.path_and_query().map_or_else(|| self.uri.path(), |pq| pq.as_str())
    }
}

#[cfg(test)]
pub(crate) fn test_request(target: &str) -> Request {
    let (parts, ()) = http::Request::builder()
        .uri(target)
        .body(())
        .expect("valid test request")
        .into_parts();
    Request::new(parts)
}
