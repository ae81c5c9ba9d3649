use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Opens the catalog database pool, sized per `Config::db_max_connections`.
    pub async fn new_pool(config: &Config) -> Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.database_url)
            .await
            .context("Failed to connect to the catalog database")?;

        info!(
            "✅ Database pool ready ({} max connections)",
            config.db_max_connections
        );

        Ok(pool)
    }
}
