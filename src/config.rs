//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 3000)
//! - `ALLOWED_ORIGIN`: The only browser origin allowed to call the API
//!   (default: http://localhost:5173, the local dev server of the form UI)
//!
//! ## What is NOT configurable
//! The shared secret (the "credential") is a hardcoded literal. It is not read
//! from the environment. This mirrors the toy service this server reproduces;
//! a real service would load it from a secret store.

use anyhow::{Context, Result};
use std::env;
use std::fmt;

/// The shared secret every write request must present in its `password` field.
pub const CREDENTIAL: &str = "123456";

/// Application configuration
///
/// This struct holds all configuration values needed to run the server.
/// All fields are public for easy access from other modules.
#[derive(Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    /// Default: 3000
    pub port: u16,

    /// Browser origin allowed to make cross-origin requests
    /// Example: "http://localhost:5173"
    pub allowed_origin: String,

    /// Shared secret checked by the request gate.
    /// Always [`CREDENTIAL`]; kept on the config so it can be injected
    /// into the gate instead of being read from a global.
    pub credential: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads variables from .env file (if present) using dotenvy
    /// 2. Reads each configuration value from environment
    /// 3. Falls back to defaults if variables aren't set
    /// 4. Returns an error if parsing fails (e.g., invalid port number)
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=3000
    /// ALLOWED_ORIGIN=http://localhost:5173
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// `from_env` passes the process environment; tests pass a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw:?}"))?,
            None => 3000,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            allowed_origin: lookup("ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
            credential: CREDENTIAL.to_string(),
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Combines host and port into a format suitable for TCP binding.
    /// Example: "127.0.0.1:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Hand-written so the startup log line never prints the credential.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("allowed_origin", &self.allowed_origin)
            .field("credential", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.allowed_origin, "http://localhost:5173");
        assert_eq!(config.credential, CREDENTIAL);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8000"),
            ("ALLOWED_ORIGIN", "http://example.test"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.allowed_origin, "http://example.test");
    }

    #[test]
    fn credential_ignores_environment() {
        let config = Config::from_lookup(lookup_from(&[("PASSWORD", "hunter2")])).unwrap();
        assert_eq!(config.credential, "123456");
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn debug_output_redacts_credential() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains(CREDENTIAL));
        assert!(rendered.contains("<redacted>"));
    }
}
