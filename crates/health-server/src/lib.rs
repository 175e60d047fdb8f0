//! HTTP health check server.
//!
//! Serves a single liveness endpoint, `GET /health`, answering with a
//! static JSON status. Requests are logged through `tracing` and handler
//! panics are turned into 500 responses.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::{Result, ServerError};

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router.
///
/// Unmatched paths fall through to Axum's default 404, and other methods on
/// `/health` get a 405.
pub fn create_app() -> Router {
    with_middleware(Router::new().route("/health", get(routes::health::check)))
}

/// Wraps `router` in request tracing and panic recovery.
///
/// A panicking handler yields a 500 instead of dropping the connection.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
