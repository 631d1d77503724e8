//! Persistence layer for the sprint board.
//!
//! Exposes sqlx models and zero-sized repositories over PostgreSQL, plus
//! pool construction, a health check, and embedded migrations. Installing
//! a `tracing` subscriber is the embedding application's job; this crate
//! only emits events.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::DbConfig;
pub use error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from config loaded out of the environment.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("running database migrations");
    sqlx::migrate!("./migrations").run(pool).await
}
