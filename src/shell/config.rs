use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::modules::localtime::core::current_time::TimeZoneMode;

pub const HOST_VAR: &str = "LOCALTIME_HOST";
pub const PORT_VAR: &str = "LOCALTIME_PORT";
pub const BASE_PATH_VAR: &str = "LOCALTIME_BASE_PATH";
pub const TIMEZONE_VAR: &str = "LOCALTIME_TIMEZONE";

pub const DEFAULT_PORT: u16 = 9095;
pub const DEFAULT_BASE_PATH: &str = "/localtime";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LOCALTIME_HOST must be an IP address, got `{0}`")]
    InvalidHost(String),

    #[error("LOCALTIME_PORT must be a port number, got `{0}`")]
    InvalidPort(String),

    #[error("LOCALTIME_TIMEZONE must be `local` or `utc`, got `{0}`")]
    InvalidTimeZone(String),

    #[error("LOCALTIME_BASE_PATH must be a literal path, got `{0}`")]
    InvalidBasePath(String),
}

// The base path becomes an axum route pattern: braces would declare captures
// and `:`/`*` segments are rejected by the router at build time.
fn validate_base_path(raw: &str) -> Result<String, ConfigError> {
    let path = raw.trim();
    let literal = !path.contains(['{', '}'])
        && path
            .split('/')
            .all(|segment| !segment.starts_with([':', '*']));
    if literal {
        Ok(path.to_string())
    } else {
        Err(ConfigError::InvalidBasePath(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub base_path: String,
    pub timezone: TimeZoneMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            timezone: TimeZoneMode::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Config::default();

        if let Some(raw) = get(HOST_VAR) {
            config.host = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?;
        }
        if let Some(raw) = get(PORT_VAR) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }
        if let Some(raw) = get(BASE_PATH_VAR) {
            config.base_path = validate_base_path(&raw)?;
        }
        if let Some(raw) = get(TIMEZONE_VAR) {
            config.timezone = raw
                .parse()
                .map_err(|_| ConfigError::InvalidTimeZone(raw.clone()))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
