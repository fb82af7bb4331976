//! Handler functions for account listing and lookup.
//!
//! Responses only ever carry `UserInfo`, so password hashes and device codes
//! cannot leak through these endpoints.

use crate::api::common::{ApiError, service_error_to_http};
use crate::database::models::UserInfo;
use crate::services::user_service::UserService;
use crate::state::AppState;
use axum::extract::{Extension, Json, Path};

/// Lists all accounts.
#[axum::debug_handler]
pub async fn list_users(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<UserInfo>>, ApiError> {
    UserService::new(state.users.clone())
        .list_users()
        .await
        .map(Json)
        .map_err(service_error_to_http)
}

/// Retrieves an account by its ID.
#[axum::debug_handler]
pub async fn get_user_by_id(
    Extension(state): Extension<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserInfo>, ApiError> {
    tracing::info!("Requested user: {}", user_id);

    UserService::new(state.users.clone())
        .find_user(&user_id)
        .await
        .map(Json)
        .map_err(service_error_to_http)
}
