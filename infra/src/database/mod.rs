//! Database module - MySQL implementations using SQLx

pub mod mysql;

pub use mysql::MySqlCodeStore;

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};

use ajar_shared::config::database::DatabaseConfig;

use crate::InfraError;

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<Pool<MySql>, InfraError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database connection pool created"
    );

    Ok(pool)
}
