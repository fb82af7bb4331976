//! Request and response bodies of the authentication endpoints.

use crate::database::models::UserInfo;
use serde::{Deserialize, Serialize};

/// Email/password form posted to both `register` and `login`.
///
/// Both fields must be present, but empty strings are accepted and go through
/// the normal lookup and password check.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the account and a freshly signed session token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserInfo,
    pub auth_token: String,
}
