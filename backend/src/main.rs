//! Backend entry-point: loads settings, prepares the database, and serves the
//! contact endpoint.

mod server;

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contact_backend::inbound::http::health::HealthState;
use contact_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{DatabaseSettings, ServerConfig, ServerSettings, create_server};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!(error = %err, "{context}");
    std::io::Error::other(format!("{context}: {err}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let server_settings =
        ServerSettings::from_env().map_err(|err| startup_error("invalid server settings", err))?;
    let db_settings = DatabaseSettings::from_env()
        .map_err(|err| startup_error("invalid database settings", err))?;
    info!(database = ?db_settings, "settings loaded");

    let database_url = db_settings
        .database_url()
        .map_err(|err| startup_error("invalid database settings", err))?;
    if server_settings.run_migrations() {
        run_migrations(database_url.as_str())
            .await
            .map_err(|err| startup_error("database migration failed", err))?;
    }

    let pool_config =
        PoolConfig::new(database_url.as_str()).with_max_size(db_settings.pool_max_size());
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| startup_error("database pool construction failed", err))?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(server_settings.bind_addr(), pool);
    let server = create_server(health_state.clone(), config)?;

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
