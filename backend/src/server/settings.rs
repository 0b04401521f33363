//! Runtime settings loaded from the environment via OrthoConfig.
//!
//! Every value has a default, so a bare `contact-backend` invocation talks to
//! a local PostgreSQL on port 5432 and listens on `0.0.0.0:8080`.

use std::ffi::OsString;
use std::fmt;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;
use zeroize::Zeroizing;

const DEFAULT_DB_HOST: &str = "127.0.0.1";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_NAME: &str = "contact_db";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);

/// Program name handed to OrthoConfig; settings come from the environment
/// only, never from command-line flags.
const PROGRAM_NAME: &str = "contact-backend";

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
#[error("failed to load {section} settings: {message}")]
pub struct SettingsError {
    section: &'static str,
    message: String,
}

/// Database connection settings (`DB_*`).
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    /// Database host name or address.
    pub host: Option<String>,
    /// Database TCP port.
    pub port: Option<u16>,
    /// Database role.
    pub user: Option<String>,
    /// Database password.
    pub pass: Option<String>,
    /// Database name.
    pub name: Option<String>,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
}

impl DatabaseSettings {
    /// Load from `DB_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| SettingsError {
            section: "database",
            message: err.to_string(),
        })
    }

    /// Host, defaulting to `127.0.0.1`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_DB_HOST)
    }

    /// Port, defaulting to `5432`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_DB_PORT)
    }

    /// Role, defaulting to `postgres`.
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_DB_USER)
    }

    /// Database name, defaulting to `contact_db`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DB_NAME)
    }

    /// Pool size, defaulting to 10.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Connection URL with percent-encoded credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the host or credentials cannot form a
    /// valid URL.
    pub fn database_url(&self) -> Result<Zeroizing<String>, SettingsError> {
        let invalid = |message: String| SettingsError {
            section: "database",
            message,
        };
        let mut url = Url::parse(&format!("postgres://{}:{}", self.host(), self.port()))
            .map_err(|err| invalid(format!("invalid host '{}': {err}", self.host())))?;
        url.set_username(self.user())
            .map_err(|()| invalid("database user cannot be encoded".to_owned()))?;
        if let Some(pass) = self.pass.as_deref().filter(|pass| !pass.is_empty()) {
            url.set_password(Some(pass))
                .map_err(|()| invalid("database password cannot be encoded".to_owned()))?;
        }
        url.set_path(&format!("/{}", self.name()));
        Ok(Zeroizing::new(url.into()))
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host())
            .field("port", &self.port())
            .field("user", &self.user())
            .field("pass", &self.pass.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name())
            .field("pool_max_size", &self.pool_max_size())
            .finish()
    }
}

/// HTTP listener settings (`CONTACT_*`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACT")]
pub struct ServerSettings {
    /// Socket address to bind.
    pub bind_addr: Option<SocketAddr>,
    /// Apply pending migrations at startup.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Load from `CONTACT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| SettingsError {
            section: "server",
            message: err.to_string(),
        })
    }

    /// Bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Whether to run migrations, defaulting to `true`.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }
}
