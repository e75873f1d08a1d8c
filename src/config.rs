//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured when present. Nothing here writes
//! to stdout, which the MCP transport owns.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default MCP server name reported during initialization.
pub const DEFAULT_SERVER_NAME: &str = "contact-book";

/// Configuration for the contact book binaries.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,

    /// Seed the service with the demo contacts at startup (default: false)
    pub seed_demo_contacts: bool,

    /// Name the MCP server reports to clients (default: "contact-book")
    pub server_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CONTACT_BOOK_SEED_DEMO`: Seed demo contacts, `true`/`false` (default: false)
    /// - `CONTACT_BOOK_SERVER_NAME`: Server name reported over MCP (default: "contact-book")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let seed_demo_contacts = Self::parse_env_bool("CONTACT_BOOK_SEED_DEMO", false)?;

        let server_name = env::var("CONTACT_BOOK_SERVER_NAME")
            .unwrap_or_else(|_| DEFAULT_SERVER_NAME.to_string());
        if server_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_SERVER_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            log_level,
            seed_demo_contacts,
            server_name,
        })
    }

    /// Parse an environment variable as bool with a default value.
    ///
    /// Accepts `true`/`false`, `1`/`0` and `yes`/`no`, case-insensitively.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            seed_demo_contacts: false,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.seed_demo_contacts);
        assert_eq!(config.server_name, "contact-book");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("CONTACT_BOOK_SEED_DEMO", "true");
        guard.set("CONTACT_BOOK_SERVER_NAME", "office-contacts");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.log_level, "debug");
        assert!(config.seed_demo_contacts);
        assert_eq!(config.server_name, "office-contacts");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_seed_flag() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_SEED_DEMO", "sometimes");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_SEED_DEMO");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_server_name() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_SERVER_NAME", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACT_BOOK_SERVER_NAME");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_YES", "Yes");
        guard.set("TEST_BOOL_ZERO", "0");

        assert!(Config::parse_env_bool("TEST_BOOL_YES", false).unwrap());
        assert!(!Config::parse_env_bool("TEST_BOOL_ZERO", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_INVALID", "maybe");

        let result = Config::parse_env_bool("TEST_BOOL_INVALID", false);
        assert!(result.is_err());
    }
}
