//! # cors-relay
//!
//! A minimal CORS forwarding proxy. A browser app that cannot call a
//! third-party API directly calls the relay instead:
//!
//! ```text
//! GET /https://example.com/data.json?page=2
//!       └──────────── target URL ───────────┘
//! ```
//!
//! The relay fetches the target and answers with the upstream body, the
//! upstream MIME type, and `Access-Control-Allow-Origin: *`. If the fetch
//! fails for any reason the answer is a `500` with a JSON body:
//!
//! ```json
//! {"error": "HTTP Error 404: Not Found", "message": "Failed to fetch from target URL"}
//! ```
//!
//! What the relay deliberately does not do: caching, retries, timeouts,
//! authentication, TLS termination, streaming, header forwarding. Each
//! request is one outbound `GET` and nothing else.
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//! use cors_relay::{Fetcher, Server, forward};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cors_relay::Error> {
//!     let app = forward::routes(Fetcher::new()?);
//!     Server::bind(SocketAddr::from(([127, 0, 0, 1], 8001))).serve(app).await
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod config;
pub mod fetch;
pub mod forward;

pub use config::Config;
pub use error::Error;
pub use fetch::{FetchError, Fetcher, Upstream};
pub use handler::{BoxFuture, Handler};
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
