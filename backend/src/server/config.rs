//! HTTP server configuration object.

use std::net::SocketAddr;

use contact_backend::outbound::persistence::DbPool;

/// Configuration for creating the HTTP server.
///
/// A pool is required: every accepted submission is written through it.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Configuration listening on `bind_addr` and storing through `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
