use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable holding the bind address.
pub const ENV_SERVER_ADDRESS: &str = "OFL_SERVER_ADDRESS";

/// Environment variable holding the service identifier the host assigns to
/// this ledger instance.
pub const ENV_SERVICE_ID: &str = "OFL_SERVICE_ID";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub service_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9090".parse().expect("static address"),
            service_id: "ofl-local".into(),
        }
    }
}

impl ServerConfig {
    /// Build a config from the host environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> ServerResult<Self> {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var(ENV_SERVER_ADDRESS) {
            config.bind_addr = addr.parse().map_err(|e| {
                ServerError::Config(format!("invalid {ENV_SERVER_ADDRESS} {addr:?}: {e}"))
            })?;
        }
        if let Ok(service_id) = std::env::var(ENV_SERVICE_ID) {
            config.service_id = service_id;
        }
        Ok(config)
    }
}
