//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module is their common home for embedded PostgreSQL setup and in-memory
//! port doubles.

#![allow(
    dead_code,
    reason = "each integration test crate uses a different subset of helpers"
)]

mod cluster_skip;
mod embedded_postgres;
mod recording_repository;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{count_rows, migrate_schema, reset_database};
pub use recording_repository::{FailingContactRepository, RecordingContactRepository};

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// The `Display` implementation often collapses database errors to a generic
/// `db error`; `as_db_error()` exposes the message and SQLSTATE.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );

    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }

    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }

    summary
}
