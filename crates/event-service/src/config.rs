//! Event Registry Service configuration.
//!
//! Configuration is loaded from environment variables. Every variable has
//! a default, so the service starts with no environment at all.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default event name when `EVENT_NAME` is not set.
pub const DEFAULT_EVENT_NAME: &str = "Tech Conference 2024";

/// Default capacity when `EVENT_CAPACITY` is not set.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default server bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Event Registry Service configuration.
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name of the event being served.
    pub event_name: String,

    /// Fixed attendee capacity. Positive; the registry never grows past it.
    pub capacity: usize,

    /// Server bind address (default: "0.0.0.0:8080").
    pub bind_address: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid capacity configuration: {0}")]
    InvalidCapacity(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let event_name = vars
            .get("EVENT_NAME")
            .cloned()
            .unwrap_or_else(|| DEFAULT_EVENT_NAME.to_string());

        let capacity = if let Some(value_str) = vars.get("EVENT_CAPACITY") {
            let value: usize = value_str.parse().map_err(|e| {
                ConfigError::InvalidCapacity(format!(
                    "EVENT_CAPACITY must be a positive integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value == 0 {
                return Err(ConfigError::InvalidCapacity(
                    "EVENT_CAPACITY must be greater than zero".to_string(),
                ));
            }

            value
        } else {
            DEFAULT_CAPACITY
        };

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Config {
            event_name,
            capacity,
            bind_address,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars_all_defaults() {
        let config = Config::from_vars(&HashMap::new()).expect("Config should load successfully");

        assert_eq!(config.event_name, DEFAULT_EVENT_NAME);
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn test_from_vars_success() {
        let vars = HashMap::from([
            ("EVENT_NAME".to_string(), "RustConf".to_string()),
            ("EVENT_CAPACITY".to_string(), "250".to_string()),
            ("BIND_ADDRESS".to_string(), "127.0.0.1:9000".to_string()),
        ]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(config.event_name, "RustConf");
        assert_eq!(config.capacity, 250);
        assert_eq!(config.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_from_vars_capacity_not_a_number() {
        let vars = HashMap::from([("EVENT_CAPACITY".to_string(), "lots".to_string())]);

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidCapacity(msg)) if msg.contains("'lots'"))
        );
    }

    #[test]
    fn test_from_vars_capacity_zero_rejected() {
        let vars = HashMap::from([("EVENT_CAPACITY".to_string(), "0".to_string())]);

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidCapacity(msg)) if msg.contains("greater than zero"))
        );
    }

    #[test]
    fn test_from_vars_negative_capacity_rejected() {
        let vars = HashMap::from([("EVENT_CAPACITY".to_string(), "-5".to_string())]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidCapacity(_))));
    }
}
