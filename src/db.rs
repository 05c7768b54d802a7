use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, Schema, Statement,
};

use crate::{
    config::AppConfig,
    entity::{Bookings, ContactMessages, NewsletterSignups, Products},
};

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Connect and prepare the schema, or return `None` so the service can run degraded.
pub async fn connect_optional(config: &AppConfig) -> Option<DatabaseConnection> {
    let Some(url) = config.connection_url() else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set; storage disabled");
        return None;
    };

    let conn = match create_orm_conn(&url).await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!(error = %err, "database connection failed; storage disabled");
            return None;
        }
    };

    if let Err(err) = ensure_schema(&conn).await {
        tracing::warn!(error = %err, "schema setup failed; storage disabled");
        return None;
    }

    tracing::info!(backend = ?conn.get_database_backend(), "database connected");
    Some(conn)
}

/// Create one table per record kind when it does not exist yet.
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(conn, Products).await?;
    create_table(conn, ContactMessages).await?;
    create_table(conn, Bookings).await?;
    create_table(conn, NewsletterSignups).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(conn: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    conn.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Names of the tables visible to the connection, sorted.
pub async fn list_tables(conn: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let backend = conn.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Postgres => {
            "SELECT table_name::text AS name FROM information_schema.tables \
             WHERE table_schema = current_schema() ORDER BY table_name"
        }
        DatabaseBackend::Sqlite => {
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
        }
        _ => {
            "SELECT table_name AS name FROM information_schema.tables \
             WHERE table_schema = DATABASE() ORDER BY table_name"
        }
    };

    let rows = conn
        .query_all(Statement::from_string(backend, sql.to_owned()))
        .await?;
    rows.iter()
        .map(|row| row.try_get::<String>("", "name"))
        .collect()
}
