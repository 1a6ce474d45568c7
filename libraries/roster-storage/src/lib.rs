//! Roster Storage
//!
//! `SQLite` persistence for the Roster user service.
//!
//! The crate owns a single table, `users`, and exposes it through
//! [`SqliteUserStorage`], an implementation of
//! [`roster_core::UserStorage`]. Queries live in the [`users`] slice.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{create_pool, run_migrations, SqliteUserStorage};
//! use roster_core::UserStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://roster.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = SqliteUserStorage::new(pool);
//! let users = storage.list_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;

pub mod users;

pub use context::SqliteUserStorage;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts, before any
/// handler touches the pool.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}

/// Open a pool and bring the schema up to date in one step
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn connect(database_url: &str) -> roster_core::Result<SqliteUserStorage> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    tracing::info!("Database schema up to date");
    Ok(SqliteUserStorage::new(pool))
}
