//! Host server configuration, read from `FORGE_*` environment variables.
//!
//! Missing variables take their defaults. Values that do not parse are logged
//! and replaced by the default as well, so a typo never keeps the board down.

use std::fmt::Display;
use std::str::FromStr;

use forge_common::model::config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_STATUS_POLL_SECONDS};
use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub status_poll_seconds: u32,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            status_poll_seconds: DEFAULT_STATUS_POLL_SECONDS,
            open_browser: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let status_poll_seconds = match parsed(&value, "FORGE_STATUS_POLL_SECONDS", defaults.status_poll_seconds) {
            0 => {
                warn!("FORGE_STATUS_POLL_SECONDS must be positive, using {}", defaults.status_poll_seconds);
                defaults.status_poll_seconds
            }
            seconds => seconds,
        };

        Self {
            host: value("FORGE_HOST").unwrap_or(defaults.host),
            port: parsed(&value, "FORGE_PORT", defaults.port),
            api_base_url: value("FORGE_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            status_poll_seconds,
            open_browser: value("FORGE_OPEN_BROWSER")
                .map(|raw| parse_flag(&raw))
                .unwrap_or(defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.clone(),
            status_poll_seconds: self.status_poll_seconds,
        }
    }
}

fn parsed<T, F>(value: &F, key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    F: Fn(&str) -> Option<String>,
{
    match value(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("invalid {} {:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
