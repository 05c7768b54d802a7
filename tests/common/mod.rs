#![allow(dead_code)]

use botanical_boutique_api::{config::AppConfig, db::ensure_schema, state::AppState};
use sea_orm::{ConnectOptions, Database};

pub fn test_config(database_url: Option<&str>) -> AppConfig {
    AppConfig {
        database_url: database_url.map(str::to_string),
        database_name: database_url.map(|_| "boutique_test".to_string()),
        host: "127.0.0.1".into(),
        port: 0,
    }
}

/// State backed by a private in-memory SQLite database with every table created.
pub async fn memory_state() -> anyhow::Result<AppState> {
    let url = "sqlite::memory:";
    let mut options = ConnectOptions::new(url);
    // A second pooled connection would open a different, empty database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    ensure_schema(&orm).await?;
    Ok(AppState::new(test_config(Some(url)), Some(orm)))
}

/// State for a service started without any storage configured.
pub fn degraded_state() -> AppState {
    AppState::new(test_config(None), None)
}
