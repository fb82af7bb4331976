//! Main entry point for the UI gateway.
//!
//! Loads configuration, opens the account store, and serves the JSON API
//! together with the embedded web client.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod routes;
mod services;
mod state;
mod ui;
mod utils;

use anyhow::Context;
use config::Config;
use database::Database;
use repositories::document_repository::StaticDocumentRepository;
use repositories::user_repository::UserRepository;
use state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::init;
use ui::assets::{EmbeddedAssets, SpaAssets};

/// Mount point of the web client's static files.
const STATIC_PREFIX: &str = "/static";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;

    let state = AppState::new(
        &config,
        Arc::new(UserRepository::new(db.pool().clone())),
        Arc::new(StaticDocumentRepository),
        SpaAssets::new(Arc::new(EmbeddedAssets), STATIC_PREFIX),
    );
    if !state.registration_open {
        info!("Registrations are closed");
    }

    let app = routes::app(state);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!("Starting UI gateway on port {}", config.server_port);
    axum::serve(listener, app).await.context("Server error")?;

    db.close().await;
    Ok(())
}
