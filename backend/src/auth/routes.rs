//! Defines the HTTP routes for registration, login and device codes.
//!
//! Mounted under `/ui/api` by the application router.

use crate::auth::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/newcode", get(new_code).layer(middleware::from_fn(jwt_auth)))
}
