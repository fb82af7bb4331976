//! Account business logic service.
//!
//! Handles listing, lookup and device-code rotation for existing accounts,
//! plus the password hashing helpers shared with the auth flow.

use crate::database::models::UserInfo;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserStorer;
use crate::utils::device_code::generate_device_code;
use bcrypt::{hash, verify};
use std::sync::Arc;

pub struct UserService {
    store: Arc<dyn UserStorer>,
}

impl UserService {
    /// Creates a new UserService instance.
    pub fn new(store: Arc<dyn UserStorer>) -> Self {
        Self { store }
    }

    /// Lists every account as its public projection.
    ///
    /// # Errors
    /// `InternalError` if the store cannot be read.
    pub async fn list_users(&self) -> ServiceResult<Vec<UserInfo>> {
        let users = self.store.get_users().await.map_err(|e| {
            tracing::error!("Unable to get users: {}", e);
            ServiceError::internal_error("Unable to get users.")
        })?;

        Ok(users.into_iter().map(UserInfo::from).collect())
    }

    /// Looks up a single account by id.
    ///
    /// # Errors
    /// - `Unauthorized` ("Invalid user") if no account has this id. Clients
    ///   depend on this status, so it is kept instead of a 404.
    /// - `Validation` if the store cannot be read.
    pub async fn find_user(&self, id: &str) -> ServiceResult<UserInfo> {
        let user = self.store.get_user(id).await.map_err(|e| {
            tracing::error!("Unable to load user {}: {}", id, e);
            ServiceError::validation("Unable to load users")
        })?;

        match user {
            Some(user) => Ok(user.into()),
            None => {
                tracing::warn!("Requested unknown user {}", id);
                Err(ServiceError::unauthorized("Invalid user"))
            }
        }
    }

    /// Generates and stores a new device pairing code for `user_id`.
    ///
    /// # Errors
    /// `InternalError` if the account cannot be loaded, the code cannot be
    /// generated, or the updated account cannot be saved.
    pub async fn new_device_code(&self, user_id: &str) -> ServiceResult<String> {
        let mut user = self
            .store
            .get_user(user_id)
            .await
            .map_err(|e| {
                tracing::error!("Unable to find user {}: {}", user_id, e);
                ServiceError::internal_error("Unable to find user")
            })?
            .ok_or_else(|| {
                tracing::error!("Unable to find user {}", user_id);
                ServiceError::internal_error("Unable to find user")
            })?;

        let code = generate_device_code().map_err(|e| {
            tracing::error!("Unable to generate new device code: {}", e);
            ServiceError::internal_error("Unable to generate new code")
        })?;

        user.device_code = Some(code.clone());
        user.updated_at = chrono::Utc::now();

        self.store.update_user(&user).await.map_err(|e| {
            tracing::error!("Unable to save device code for {}: {}", user_id, e);
            ServiceError::internal_error("Unable to save new code")
        })?;

        Ok(code)
    }

    /// Hashes a password before it is stored.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if hashing fails
    pub fn hash_password(password: &str, cost: u32) -> ServiceResult<String> {
        hash(password, cost).map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            ServiceError::validation(format!("Password hashing failed: {}", e))
        })
    }

    /// Verifies a password against the stored hash.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the hash cannot be parsed
    pub fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash)
            .map_err(|e| ServiceError::validation(format!("Password verification failed: {}", e)))
    }
}
