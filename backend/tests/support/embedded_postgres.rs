//! Database provisioning helpers for embedded PostgreSQL suites.
//!
//! Database reset uses `postgres` directly so `DROP DATABASE` runs outside a
//! transaction. Schema setup reuses the backend's embedded migrations so test
//! schemas cannot drift from production.

use contact_backend::outbound::persistence::MIGRATIONS;
use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

use super::format_postgres_error;

/// Drop and recreate `name` on the cluster.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE); CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}

/// Run all pending migrations against `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("{err:?}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err:?}"))?;
    Ok(())
}

/// Number of rows in the `contact` table.
pub fn count_rows(url: &str) -> Result<i64, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let row = client
        .query_one("SELECT COUNT(*) FROM contact", &[])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
