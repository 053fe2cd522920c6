//! Database pool construction and schema migrations.

use crate::error::Result;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::path::Path;
use tracing::info;

pub type DbPool = SqlitePool;

/// Open a connection pool for the given database URL.
///
/// The URL is passed in by the caller rather than read from the environment,
/// so the server and tests can build pools against different databases.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

/// Apply all pending migrations from the given directory.
pub async fn run_migrations(pool: &DbPool, migrations_path: &str) -> Result<()> {
    let migrator = sqlx::migrate::Migrator::new(Path::new(migrations_path)).await?;
    migrator.run(pool).await?;
    info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_pool_connects_in_memory() {
        let pool = create_pool("sqlite::memory:")
            .await
            .expect("Failed to create pool");

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .expect("Failed to run query");
    }

    #[tokio::test]
    async fn migrations_run_cleanly() {
        let pool = create_pool("sqlite::memory:")
            .await
            .expect("Failed to create pool");

        run_migrations(&pool, "migrations")
            .await
            .expect("Migrations failed");

        // A second run must be a no-op
        run_migrations(&pool, "migrations")
            .await
            .expect("Migration re-run failed");
    }
}
