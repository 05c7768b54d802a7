use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{db::list_tables, state::AppState};

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Best-effort status of the process and its storage. Never fails.
pub async fn probe(state: &AppState) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".into(),
        database: "❌ Not Available".into(),
        database_url: env_status(state.config.database_url.is_some()),
        database_name: env_status(state.config.database_name.is_some()),
        connection_status: "Not Connected".into(),
        collections: Vec::new(),
    };

    let Some(orm) = state.orm.as_ref() else {
        report.database = "⚠️ Available but not initialized".into();
        return report;
    };

    match probe_storage(orm).await {
        Ok(collections) => {
            report.database = "✅ Connected & Working".into();
            report.connection_status = "Connected".into();
            report.collections = collections;
        }
        Err(err) => {
            tracing::warn!(error = %err, "storage probe failed");
            report.database = format!("❌ Error: {}", truncate(&err.to_string(), MAX_ERROR_CHARS));
        }
    }

    report
}

async fn probe_storage(orm: &DatabaseConnection) -> Result<Vec<String>, sea_orm::DbErr> {
    orm.ping().await?;
    let mut tables = list_tables(orm).await?;
    tables.truncate(MAX_COLLECTIONS);
    Ok(tables)
}

fn env_status(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
