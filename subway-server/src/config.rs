//! Server configuration.

use std::net::SocketAddr;

use crate::network::{EdgeDirection, InvalidEdgeDirection, PathConfig};

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "SUBWAY_BIND_ADDR";

/// Environment variable selecting how sections are travelled in path search.
pub const PATH_DIRECTION_VAR: &str = "SUBWAY_PATH_DIRECTION";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SUBWAY_BIND_ADDR {value:?}: {message}")]
    BindAddr { value: String, message: String },

    #[error("invalid SUBWAY_PATH_DIRECTION: {0}")]
    PathDirection(#[from] InvalidEdgeDirection),
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Path search parameters.
    pub path: PathConfig,
}

impl ServerConfig {
    pub fn new(bind_addr: SocketAddr, path: PathConfig) -> Self {
        Self { bind_addr, path }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::BindAddr {
                    value: value.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(PATH_DIRECTION_VAR) {
            config.path.direction = value.parse::<EdgeDirection>()?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            path: PathConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.path.direction, EdgeDirection::UpToDown);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn custom_config() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (PATH_DIRECTION_VAR, "both"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.path.direction, EdgeDirection::Both);
    }

    #[test]
    fn bad_values_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::BindAddr { .. }));
        assert!(err.to_string().starts_with("invalid SUBWAY_BIND_ADDR \"nowhere\""));

        let err =
            ServerConfig::from_lookup(lookup(&[(PATH_DIRECTION_VAR, "sideways")])).unwrap_err();
        assert!(matches!(err, ConfigError::PathDirection(_)));
    }
}
