//! Defines the HTTP routes for account listing. All of them require a UI token.

use super::handlers::{get_user_by_id, list_users};
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn user_router() -> Router {
    Router::new()
        .route("/users", get(list_users).layer(middleware::from_fn(jwt_auth)))
        .route(
            "/users/{userid}",
            get(get_user_by_id).layer(middleware::from_fn(jwt_auth)),
        )
}
