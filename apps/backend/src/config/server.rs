//! Server configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_HEARTBEAT_SECS: u64 = 20;
const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 40;

/// Websocket session timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WsConfig {
    /// How often the server pings each client.
    pub heartbeat_interval: Duration,
    /// Silence after which a client is dropped.
    pub client_timeout: Duration,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval: Duration::from_secs(DEFAULT_HEARTBEAT_SECS),
            client_timeout: Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub ws: WsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ws: WsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DUEL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "DUEL_PORT", DEFAULT_PORT)?;

        let heartbeat_secs = parse_or(&lookup, "DUEL_WS_HEARTBEAT_SECS", DEFAULT_HEARTBEAT_SECS)?;
        let timeout_secs = parse_or(
            &lookup,
            "DUEL_WS_CLIENT_TIMEOUT_SECS",
            DEFAULT_CLIENT_TIMEOUT_SECS,
        )?;

        if heartbeat_secs == 0 {
            return Err(AppError::config(
                "DUEL_WS_HEARTBEAT_SECS must be greater than zero".to_string(),
            ));
        }
        if timeout_secs <= heartbeat_secs {
            return Err(AppError::config(format!(
                "DUEL_WS_CLIENT_TIMEOUT_SECS ({timeout_secs}) must exceed DUEL_WS_HEARTBEAT_SECS ({heartbeat_secs})"
            )));
        }

        Ok(Self {
            host,
            port,
            ws: WsConfig {
                heartbeat_interval: Duration::from_secs(heartbeat_secs),
                client_timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("{name} must be a valid number, got '{raw}'"))
        }),
    }
}
