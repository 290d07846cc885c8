use crate::types::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .map_err(|err| {
            tracing::error!("{}", err);
            err
        })
        .context("Error connecting to database")?;

    Ok(DatabaseConnection { pool })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<()> {
    sqlx::migrate!()
        .run(&db_conn.pool)
        .await
        .map_err(|err| {
            tracing::error!("{}", err);
            err
        })
        .context("Failed to run database migrations")
}
