//! Process configuration loaded via OrthoConfig.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Interface the server binds to when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Listener settings, read from `USERS_API_*` variables and CLI flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
}

/// The configured host is not an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bind host {host:?}: expected an IP address")]
pub struct InvalidHost {
    host: String,
}

impl ServerSettings {
    /// Return the configured host, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`InvalidHost`] when the host does not parse as an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidHost> {
        let host = self.host();
        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port()))
            .map_err(|_| InvalidHost {
                host: host.to_owned(),
            })
    }
}
