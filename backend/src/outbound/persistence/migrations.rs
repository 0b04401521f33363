//! Embedded schema migrations for the contact store.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;
use zeroize::Zeroizing;

/// Migrations compiled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {message}")]
    Connect { message: String },

    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },

    /// The blocking migration task did not complete.
    #[error("migration task aborted: {message}")]
    Task { message: String },
}

fn apply_pending(database_url: &str) -> Result<usize, MigrationError> {
    let mut connection =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connect {
            message: err.to_string(),
        })?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.len())
}

/// Apply every pending migration against `database_url`.
///
/// Diesel migrations need a synchronous connection, so the work runs on the
/// blocking thread pool.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection fails, a migration fails,
/// or the blocking task panics.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = Zeroizing::new(database_url.to_owned());
    let applied = tokio::task::spawn_blocking(move || apply_pending(url.as_str()))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })??;
    info!(applied, "database migrations complete");
    Ok(())
}
