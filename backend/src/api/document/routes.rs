//! Defines the HTTP route for the document listing. Requires a UI token.

use super::handlers::list_documents;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn document_router() -> Router {
    Router::new().route(
        "/list",
        get(list_documents).layer(middleware::from_fn(jwt_auth)),
    )
}
