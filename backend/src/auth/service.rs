//! Core business logic for registration and login.

use crate::auth::models::*;
use crate::database::models::{User, UserInfo};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::StoreError;
use crate::repositories::user_repository::UserStorer;
use crate::services::user_service::UserService;
use crate::state::AppState;
use crate::utils::jwt::{JwtUtils, UI_AUDIENCE};
use std::sync::Arc;

/// Message for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Authentication service for handling registration, login and token issuance
pub struct AuthService {
    store: Arc<dyn UserStorer>,
    jwt_utils: Arc<JwtUtils>,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(state: &AppState) -> Self {
        AuthService {
            store: state.users.clone(),
            jwt_utils: state.jwt.clone(),
            bcrypt_cost: state.bcrypt_cost,
        }
    }

    /// Create a new account unless the email is taken. Whether registration is
    /// open is checked by the caller.
    pub async fn register(&self, request: LoginRequest) -> ServiceResult<UserInfo> {
        let existing = self
            .store
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| {
                tracing::error!("Unable to load users: {}", e);
                ServiceError::validation("Unable to load users")
            })?;

        if existing.is_some() {
            return Err(already_registered(&request.email));
        }

        let password_hash = UserService::hash_password(&request.password, self.bcrypt_cost)?;
        let user = User::new(request.email, password_hash);

        // The store's unique index settles concurrent registrations of one email.
        match self.store.register_user(&user).await {
            Ok(()) => {}
            Err(StoreError::AlreadyExists { .. }) => return Err(already_registered(&user.email)),
            Err(e) => {
                tracing::error!("Unable to register {}: {}", user.email, e);
                return Err(ServiceError::validation("Unable to register user"));
            }
        }

        tracing::info!("Registered user {} ({})", user.email, user.id);
        Ok(user.into())
    }

    /// Authenticate user and issue a UI session token
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .store
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| {
                tracing::error!("Unable to load users: {}", e);
                ServiceError::validation("Unable to load users")
            })?;

        let Some(user) = user else {
            tracing::warn!("Login attempt for unknown email");
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
        };

        match UserService::verify_password(&request.password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("Wrong password for user {}", user.id);
                return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
            }
            Err(e) => {
                tracing::error!("{} (user {})", e, user.id);
                return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
            }
        }

        let auth_token = self.jwt_utils.generate_token(&user.id, UI_AUDIENCE)?;

        Ok(LoginResponse {
            user: user.into(),
            auth_token,
        })
    }
}

fn already_registered(email: &str) -> ServiceError {
    ServiceError::validation(format!("{} is already registered.", email))
}
