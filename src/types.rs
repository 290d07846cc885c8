pub use crate::utils::database;
use crate::modules::place::repository::{PgPlaceRepository, PlaceRepository};
use anyhow::{bail, Context as _, Result};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub places: Arc<dyn PlaceRepository>,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").context("DATABASE_URL environment variable is required")?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "4".to_string())
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be a positive integer");
        }

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;
        let url = lookup("URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://{}:{}", host, port));

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig { host, port, url },
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database pool size: {}", self.database.max_connections);
        tracing::info!("  Public URL: {}", self.app.url);
        tracing::info!("  Listening on: {}:{}", self.app.host, self.app.port);
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context> {
        let db_conn = database::connect(&self.database).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            places: Arc::new(PgPlaceRepository::new(db_conn)),
        })
    }
}

#[cfg(test)]
impl Context {
    pub fn for_tests(places: impl PlaceRepository + 'static) -> Self {
        Self {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                port: 8000,
                url: "http://localhost:8000".to_string(),
            },
            places: Arc::new(places),
        }
    }
}
