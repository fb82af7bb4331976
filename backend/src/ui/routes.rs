//! Routes for the web client: static mount, favicon and shell fallback.

use super::handlers::{serve_favicon, serve_shell, serve_static};
use axum::{Router, routing::get};

/// Creates the router serving the bundle mounted at `prefix`, with the shell
/// document as fallback for every unmatched request.
pub fn spa_router(prefix: &str) -> Router {
    Router::new()
        .route(
            &format!("{}/{{*path}}", prefix.trim_end_matches('/')),
            get(serve_static),
        )
        .route("/favicon.ico", get(serve_favicon))
        .fallback(serve_shell)
}
