//! Middleware and extractors for authenticated routes.
//!
//! `jwt_auth` validates the bearer token and stores its `Claims` in the request
//! extensions. Handlers read the resolved identity through `CurrentUser`.

use crate::api::common::{ApiError, service_error_to_http};
use crate::errors::ServiceError;
use crate::state::AppState;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or_else(|| service_error_to_http(ServiceError::unauthorized("Missing bearer token")))?;

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::warn!("{}", e);
            Err(service_error_to_http(ServiceError::unauthorized(
                "Invalid token",
            )))
        }
    }
}

/// Id of the account the request was authenticated as, if any.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<String>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(
            parts
                .extensions
                .get::<Claims>()
                .map(|claims| claims.user_id().to_string()),
        ))
    }
}
