//! Handler functions for the authentication endpoints.
//!
//! These functions parse the request, delegate to `AuthService` or
//! `UserService`, and translate failures with `service_error_to_http`.

use crate::api::common::{ApiError, json_rejection_to_service_error, service_error_to_http};
use crate::auth::middleware::CurrentUser;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::database::models::UserInfo;
use crate::errors::ServiceError;
use crate::services::user_service::UserService;
use crate::state::AppState;
use axum::extract::{Extension, Json, rejection::JsonRejection};

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserInfo>, ApiError> {
    if !state.registration_open {
        return Err(service_error_to_http(ServiceError::permission_denied(
            "Registrations are closed",
        )));
    }

    let Json(form) =
        payload.map_err(|e| service_error_to_http(json_rejection_to_service_error(e)))?;

    AuthService::new(&state)
        .register(form)
        .await
        .map(Json)
        .map_err(service_error_to_http)
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(form) =
        payload.map_err(|e| service_error_to_http(json_rejection_to_service_error(e)))?;

    AuthService::new(&state)
        .login(form)
        .await
        .map(Json)
        .map_err(service_error_to_http)
}

/// Generate a fresh device pairing code for the authenticated user
#[axum::debug_handler]
pub async fn new_code(
    Extension(state): Extension<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<String>, ApiError> {
    let Some(user_id) = user_id else {
        tracing::error!("Unable to find user id in request context");
        return Err(service_error_to_http(ServiceError::internal_error(
            "Internal Server Error",
        )));
    };

    UserService::new(state.users.clone())
        .new_device_code(&user_id)
        .await
        .map(Json)
        .map_err(service_error_to_http)
}
