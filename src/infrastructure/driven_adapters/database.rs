//! Database Connection Management
//!
//! Utilities for creating connection pools and classifying driver errors.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;
use crate::shared::errors::RepositoryError;

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns the driver error if the database cannot be reached.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Map a failed write, surfacing unique constraint violations separately
pub(crate) fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::UniqueViolation(db_err.constraint().unwrap_or("unique").to_string())
        }
        _ => RepositoryError::Database(err),
    }
}
