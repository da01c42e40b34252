//! Configuration schema definitions.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Error type for configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The bind address string could not be parsed as `host:port`.
    #[error("invalid bind address {addr:?}: {source}")]
    InvalidBindAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Root configuration for the mirror server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address. Port 0 asks the OS for a free ephemeral port.
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:0".to_string(),
        }
    }
}

impl ListenerConfig {
    /// Parse the configured bind address into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                addr: self.bind_address.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_ephemeral_port_on_all_interfaces() {
        let config = ServerConfig::default();
        let addr = config.listener.socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 0);
    }

    #[test]
    fn rejects_unparseable_bind_address() {
        let listener = ListenerConfig {
            bind_address: "not-an-address".to_string(),
        };
        assert!(listener.socket_addr().is_err());
    }
}
