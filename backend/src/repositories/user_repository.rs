//! Database repository for account persistence.
//!
//! Provides the `UserStorer` capability and its SQLite implementation. Email
//! uniqueness is enforced by a unique index, so `register_user` is an atomic
//! insert-if-absent.

use super::{StoreError, StoreResult};
use crate::database::models::User;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Account storage capability.
#[async_trait]
pub trait UserStorer: Send + Sync {
    /// Every stored account, oldest first.
    async fn get_users(&self) -> StoreResult<Vec<User>>;

    /// Keyed lookup by account id.
    async fn get_user(&self, id: &str) -> StoreResult<Option<User>>;

    /// Keyed lookup by exact, case-sensitive email.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Inserts a new account. Fails with `StoreError::AlreadyExists` when the
    /// email is taken, even under concurrent registrations.
    async fn register_user(&self, user: &User) -> StoreResult<()>;

    /// Overwrites the mutable fields of an existing account.
    async fn update_user(&self, user: &User) -> StoreResult<()>;
}

/// Repository for user database operations.
#[derive(Clone)]
pub struct UserRepository {
    /// Shared SQLite connection pool
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool (cheap to clone)
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, email, password_hash, name, device_code, created_at, updated_at";

#[async_trait]
impl UserStorer for UserRepository {
    async fn get_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn get_user(&self, id: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn register_user(&self, user: &User) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, name, device_code, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.device_code)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_error)) if db_error.is_unique_violation() => {
                Err(StoreError::AlreadyExists {
                    entity: "User".to_string(),
                    identifier: user.email.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_user(&self, user: &User) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email = ?, password_hash = ?, name = ?, device_code = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.device_code)
        .bind(user.updated_at)
        .bind(&user.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "User".to_string(),
                identifier: user.id.clone(),
            });
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::memory_database;

    async fn repo() -> UserRepository {
        UserRepository::new(memory_database().await.pool)
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let repo = repo().await;
        let user = User::new("a@x.com", "hash");
        repo.register_user(&user).await.unwrap();

        let by_id = repo.get_user(&user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");
        assert_eq!(by_id.password_hash, "hash");

        let by_email = repo.get_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);

        assert!(repo.get_user("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repo = repo().await;
        repo.register_user(&User::new("a@x.com", "hash")).await.unwrap();

        assert!(repo.get_user_by_email("A@X.COM").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = repo().await;
        repo.register_user(&User::new("a@x.com", "h1")).await.unwrap();

        let err = repo
            .register_user(&User::new("a@x.com", "h2"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
        assert_eq!(repo.get_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_device_code() {
        let repo = repo().await;
        let mut user = User::new("a@x.com", "hash");
        repo.register_user(&user).await.unwrap();

        user.device_code = Some("abcd1234".to_string());
        repo.update_user(&user).await.unwrap();

        let stored = repo.get_user(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.device_code.as_deref(), Some("abcd1234"));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = repo().await;
        let err = repo
            .update_user(&User::new("ghost@x.com", "hash"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
