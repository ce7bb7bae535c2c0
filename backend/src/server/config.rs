//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use users_api::domain::ports::UserStore;
use users_api::outbound::memory::InMemoryUserStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UserStore>,
}

impl ServerConfig {
    /// Construct a server configuration backed by an empty in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            users: Arc::new(InMemoryUserStore::new()),
        }
    }

    /// Replace the user store shared by every worker.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by bootstrap tests")
    )]
    #[must_use]
    pub fn with_user_store(mut self, users: Arc<dyn UserStore>) -> Self {
        self.users = users;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
