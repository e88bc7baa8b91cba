//! The forwarding handler.
//!
//! `GET /<target-url>` fetches `<target-url>` and relays the body with
//! `Access-Control-Allow-Origin: *`. The request path is the only routing
//! key: there is no allow-list or mapping table.
//!
//! | Outcome | Status | Content-Type | Body |
//! |---|---|---|---|
//! | upstream 2xx | `200` | upstream MIME type | upstream bytes |
//! | any [`FetchError`] | `500` | `application/json` | `{"error": …, "message": "Failed to fetch from target URL"}` |

use http::Method;
use http::StatusCode;
use http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use serde_json::json;
use tracing::{debug, warn};

use crate::fetch::{FetchError, Fetcher, Upstream};
use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Fixed `message` field of every failure body.
pub const FAILURE_MESSAGE: &str = "Failed to fetch from target URL";

/// The relay's routing table: every `GET` path, `/` included, is forwarded.
pub fn routes(fetcher: Fetcher) -> Router {
    Router::new()
        .on(Method::GET, "/", handler(fetcher.clone()))
        .on(Method::GET, "/{*target}", handler(fetcher))
}

/// Wraps [`forward`] as a route handler that owns its fetcher.
pub fn handler(fetcher: Fetcher) -> impl Handler {
    move |req: Request| {
        let fetcher = fetcher.clone();
        async move { forward(&fetcher, req).await }
    }
}

/// Extracts the target URL: the request target minus exactly one leading `/`.
///
/// Nothing is decoded or validated here; a bad target surfaces later as a
/// [`FetchError`].
pub fn target_url(path_and_query: &str) -> &str {
    path_and_query.strip_prefix('/').unwrap_or(path_and_query)
}

/// Handles one inbound request: fetch the target, then relay or report.
pub async fn forward(fetcher: &Fetcher, req: Request) -> Response {
    let target = target_url(req.path_and_query());
    match fetcher.get(target).await {
        Ok(upstream) => {
            debug!(
                url = target,
                upstream_status = upstream.status.as_u16(),
                bytes = upstream.body.len(),
                "fetched"
            );
            relayed(upstream)
        }
        Err(e) => {
            warn!(url = target, error = %e, "fetch failed");
            failure(&e)
        }
    }
}

// Upstream 2xx codes other than 200 are deliberately flattened to 200.
fn relayed(upstream: Upstream) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN.as_str(), "*")
        .bytes(&upstream.content_type, upstream.body)
}

fn failure(err: &FetchError) -> Response {
    let body = json!({
        "error": err.to_string(),
        "message": FAILURE_MESSAGE,
    });
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .json(body.to_string())
}
