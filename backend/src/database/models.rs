//! Rust structs that represent stored records and their public projections.
//!
//! `User` mirrors the `users` table and carries the password hash. It does not
//! implement `Serialize`; anything sent to a client goes through `UserInfo`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    /// One-time code used to pair a device with this account.
    pub device_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a fresh, not yet persisted account from an already hashed password.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        let email = email.into();
        Self {
            id: Uuid::now_v7().to_string(),
            name: email.clone(),
            email,
            password_hash: password_hash.into(),
            device_code: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Client-facing view of an account. Has no credential fields.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Entry of the document listing. Field names follow the web client's
/// existing wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub parent_id: String,
}
