//! Assembles the complete application router.
//!
//! JSON endpoints live under `/ui/api`; everything else is handled by the
//! web client router, whose shell fallback also answers requests for a known
//! path with an unsupported method.

use crate::state::AppState;
use crate::{api, auth, ui};
use axum::{Extension, Router};

pub const API_ROOT: &str = "/ui/api";

pub fn app(state: AppState) -> Router {
    let prefix = state.assets.prefix().to_string();

    let api_router = Router::new()
        .merge(auth::routes::auth_router())
        .merge(api::user::routes::user_router())
        .merge(api::document::routes::document_router());

    Router::new()
        .nest(API_ROOT, api_router)
        .merge(ui::routes::spa_router(&prefix))
        .method_not_allowed_fallback(ui::handlers::serve_shell)
        .layer(Extension(state))
}
