//! Handler trait and type erasure.
//!
//! The router stores handlers of different concrete types in one map, so
//! every handler is erased behind `Arc<dyn Handler>`:
//!
//! ```text
//! move |req| async move { … }        ← closure capturing the fetcher
//!        ↓ router.on(GET, "/{*target}", closure)
//! Arc::new(closure) as BoxedHandler  ← stored once at startup
//!        ↓
//! handler.call(req)                  ← one vtable dispatch per request
//!        ↓
//! Box::pin(async { fut.await.into_response() })
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
///
/// `Send + 'static` lets tokio move it between worker threads.
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A handler shared across concurrent connection tasks.
pub(crate) type BoxedHandler = Arc<dyn Handler>;

/// Implemented for every valid route handler.
///
/// Satisfied automatically by any `Fn(Request) -> impl Future` whose output
/// implements [`IntoResponse`], which covers both `async fn` items and
/// closures that capture state such as a [`Fetcher`](crate::Fetcher).
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request) -> BoxFuture;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = self(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
