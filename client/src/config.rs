//! Client configuration
//!
//! Code defaults with environment variable overrides using the SOM_ prefix,
//! e.g. SOM_API__BASE_URL and SOM_API__TIMEOUT_SECONDS.

use config::{ConfigError, Environment};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        config::Config::builder()
            .set_default("api.base_url", "http://localhost:3000")?
            .set_default("api.timeout_seconds", 30)?
            .add_source(Environment::with_prefix("SOM").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_environment() {
        let config = Config::load().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_seconds, 30);
    }
}
