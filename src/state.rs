use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct AppState {
    pub orm: Option<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, orm: Option<DatabaseConnection>) -> Self {
        Self {
            orm,
            config: Arc::new(config),
        }
    }

    /// The storage connection, or `StorageUnavailable` when running degraded.
    pub fn orm(&self) -> AppResult<&DatabaseConnection> {
        self.orm.as_ref().ok_or(AppError::StorageUnavailable)
    }
}
