use std::env;

use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        let database_name = env::var("DATABASE_NAME").ok().filter(|v| !v.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);
        Ok(Self {
            port,
            database_url,
            database_name,
            host,
        })
    }

    /// URL handed to the database driver, or `None` when storage is not configured.
    ///
    /// For Postgres URLs the database path is replaced by `DATABASE_NAME`; any other
    /// scheme (e.g. `sqlite:`) is used as given.
    pub fn connection_url(&self) -> Option<String> {
        let url = self.database_url.as_ref()?;
        let name = self.database_name.as_ref()?;
        match Url::parse(url) {
            Ok(mut parsed) if matches!(parsed.scheme(), "postgres" | "postgresql") => {
                parsed.set_path(name);
                Some(parsed.to_string())
            }
            _ => Some(url.clone()),
        }
    }
}
