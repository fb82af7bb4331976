//! Persistence capabilities and their implementations.
//!
//! Handlers and services depend on the `UserStorer` and `DocumentStorer`
//! traits only; the SQLite and static implementations are chosen in `main`.

use thiserror::Error;

pub mod document_repository;
pub mod user_repository;

/// Errors surfaced by a storage capability.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert collided with an existing unique key.
    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("Storage error: {0}")]
    Backend(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
