//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. The relay only registers
//! `GET` routes; a method with no tree at all is answered `501` by the server.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Catch-alls use `{*name}` syntax. The relay registers the root as its
    /// own route next to the catch-all:
    ///
    /// ```rust,no_run
    /// # use cors_relay::{Request, Response, Router};
    /// # use http::Method;
    /// # async fn index(_: Request) -> Response { Response::status(http::StatusCode::OK) }
    /// # async fn relay(_: Request) -> Response { Response::status(http::StatusCode::OK) }
    /// Router::new()
    ///     .on(Method::GET, "/",          index)
    ///     .on(Method::GET, "/{*target}", relay);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        let handler: BoxedHandler = Arc::new(handler);
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Whether any route is registered for `method`.
    pub(crate) fn handles(&self, method: &Method) -> bool {
        self.routes.contains_key(method)
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<BoxedHandler> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
