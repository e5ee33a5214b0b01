//! Persistence layer: connection pool, migrations, models and repositories.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Embedded schema migrations from `crates/db/migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Schema state as seen by the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Migrations recorded as successfully applied in the database.
    pub applied: i64,
    /// Migrations embedded in this binary.
    pub embedded: i64,
}

impl MigrationStatus {
    /// True when every embedded migration has been applied.
    pub fn is_current(&self) -> bool {
        self.applied >= self.embedded
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!(embedded = MIGRATOR.migrations.len(), "Migrations up to date");
    Ok(())
}

/// Compare applied migrations (from `_sqlx_migrations`) with the embedded set.
pub async fn migration_status(pool: &DbPool) -> Result<MigrationStatus, sqlx::Error> {
    let (applied,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await?;
    Ok(MigrationStatus {
        applied,
        embedded: MIGRATOR.migrations.len() as i64,
    })
}
