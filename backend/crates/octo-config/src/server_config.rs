use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

/// Listener for the sign-in API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, an IP literal or hostname without scheme
    pub host: String,
    /// 0 lets the OS pick
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port`, bracketing IPv6 literals
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ConfigError::config("server.host cannot be empty"));
        }
        if host.contains("://") || host.contains(char::is_whitespace) {
            return Err(ConfigError::config(format!(
                "server.host must be a bare address, got '{}'",
                self.host
            )));
        }

        match self.port {
            0 => Ok(()),
            port if port >= MIN_PORT => Ok(()),
            port => Err(ConfigError::config(format!(
                "server.port must be 0 or at least {}, got {}",
                MIN_PORT, port
            ))),
        }
    }
}
