//! Shared, immutable application state.
//!
//! Built once in `main` from the loaded `Config` and passed to every handler
//! through an `Extension` layer. Collaborators are trait objects so tests can
//! swap them out.

use crate::config::Config;
use crate::repositories::document_repository::DocumentStorer;
use crate::repositories::user_repository::UserStorer;
use crate::ui::assets::SpaAssets;
use crate::utils::jwt::JwtUtils;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStorer>,
    pub documents: Arc<dyn DocumentStorer>,
    pub assets: SpaAssets,
    pub jwt: Arc<JwtUtils>,
    pub registration_open: bool,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(
        config: &Config,
        users: Arc<dyn UserStorer>,
        documents: Arc<dyn DocumentStorer>,
        assets: SpaAssets,
    ) -> Self {
        Self {
            users,
            documents,
            assets,
            jwt: Arc::new(JwtUtils::new(
                config.jwt_secret.as_bytes(),
                config.jwt_expires_in_seconds,
            )),
            registration_open: config.registration_open,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::AppState;
    use crate::config::Config;
    use crate::database::test_support::memory_database;
    use crate::repositories::document_repository::StaticDocumentRepository;
    use crate::repositories::user_repository::{UserRepository, UserStorer};
    use crate::ui::assets::{EmbeddedAssets, SpaAssets};
    use std::sync::Arc;

    /// Cheapest cost bcrypt accepts; keeps hashing fast in tests.
    pub const TEST_BCRYPT_COST: u32 = 4;

    pub fn test_config(registration_open: bool) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: 3600,
            server_port: 0,
            registration_open,
            bcrypt_cost: TEST_BCRYPT_COST,
        }
    }

    /// State backed by a fresh in-memory database and the embedded bundle.
    pub async fn test_state(registration_open: bool) -> AppState {
        let database = memory_database().await;
        state_with_users(Arc::new(UserRepository::new(database.pool)), registration_open)
    }

    /// State over the given account store.
    pub fn state_with_users(users: Arc<dyn UserStorer>, registration_open: bool) -> AppState {
        AppState::new(
            &test_config(registration_open),
            users,
            Arc::new(StaticDocumentRepository),
            SpaAssets::new(Arc::new(EmbeddedAssets), "/static"),
        )
    }
}
