//! Process-wide service configuration
//!
//! Built once at startup from `AI_*` environment variables and never mutated
//! afterwards. The web layer holds it behind an `Arc`.

use std::env;
use std::net::{SocketAddr, ToSocketAddrs};

use crate::errors::{SharedError, SharedResult};

pub const DEFAULT_APP_NAME: &str = "Nexora AI Service";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Immutable service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Reported by `/version`
    pub app_name: String,
    pub app_version: String,
    /// Allowed CORS origins; `*` allows any origin
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
    /// Worker threads for the async runtime
    pub workers: usize,
    pub log_level: String,
    /// Runtime switch for the Isolation Forest capability
    pub iforest_enabled: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
            cors_origins: vec!["*".to_string()],
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: 1,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            iforest_enabled: true,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> SharedResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to the defaults. Values that are set but do not
    /// parse are rejected rather than silently replaced.
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let app_name = lookup("AI_APP_NAME").unwrap_or(defaults.app_name);
        let app_version = lookup("AI_APP_VERSION").unwrap_or(defaults.app_version);

        let cors_origins = match lookup("AI_CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => defaults.cors_origins,
        };

        let host = lookup("AI_HOST").unwrap_or(defaults.host);

        let port = match lookup("AI_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| invalid("AI_PORT", &raw))?,
            None => defaults.port,
        };

        let workers = match lookup("AI_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("AI_WORKERS", &raw)),
            },
            None => defaults.workers,
        };

        let log_level = lookup("AI_LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .unwrap_or(defaults.log_level);

        let iforest_enabled = match lookup("AI_IFOREST_ENABLED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid("AI_IFOREST_ENABLED", &raw))?,
            None => defaults.iforest_enabled,
        };

        Ok(Self {
            app_name,
            app_version,
            cors_origins,
            host,
            port,
            workers,
            log_level,
            iforest_enabled,
        })
    }

    /// True when `*` appears among the configured origins
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }

    /// Resolve host and port into a socket address
    pub fn bind_address(&self) -> SharedResult<SocketAddr> {
        let address = format!("{}:{}", self.host, self.port);
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| SharedError::InvalidAddress { address: address.clone() })?
            .next()
            .ok_or(SharedError::InvalidAddress { address })
    }
}

fn invalid(field: &str, value: &str) -> SharedError {
    SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
