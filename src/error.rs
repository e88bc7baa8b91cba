//! Unified error type.

use thiserror::Error;

/// The error type returned by the relay's fallible setup operations.
///
/// A failed upstream fetch is not an `Error`: it is a
/// [`FetchError`](crate::FetchError) that the handler turns into a `500`
/// response. This type surfaces infrastructure failures only: binding to a
/// port, accepting a connection, or building the outbound HTTP client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
}
