//! Server settings read from the environment.
//!
//! | variable                 | default     |
//! |--------------------------|-------------|
//! | `SCHEMAINI_HOST`         | `127.0.0.1` |
//! | `SCHEMAINI_PORT`         | `8080`      |
//! | `SCHEMAINI_OPEN_BROWSER` | `true`      |
//! | `SCHEMAINI_JSON_LIMIT`   | `65536`     |
//!
//! A value that does not parse is logged and replaced by the default.

use log::warn;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the system browser on the server URL after start-up.
    pub open_browser: bool,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            json_limit: 64 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("SCHEMAINI_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "SCHEMAINI_PORT", defaults.port),
            open_browser: lookup("SCHEMAINI_OPEN_BROWSER")
                .map(|raw| parse_flag("SCHEMAINI_OPEN_BROWSER", &raw, defaults.open_browser))
                .unwrap_or(defaults.open_browser),
            json_limit: parse_or(&lookup, "SCHEMAINI_JSON_LIMIT", defaults.json_limit),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

fn parse_flag(key: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }
    }
}
