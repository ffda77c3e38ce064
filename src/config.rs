//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `Planning Center` Online application ID
    pub pc_id: String,
    /// `Planning Center` Online application secret
    pub pc_secret: String,
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(app_id) = env::var("PC_ID") {
            config.pc_id = app_id;
        }

        if let Ok(secret) = env::var("PC_SECRET") {
            config.pc_secret = secret;
        }

        Ok(config)
    }

    /// Check if `Planning Center` credentials are present
    pub const fn has_credentials(&self) -> bool {
        !self.pc_id.is_empty() && !self.pc_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = Config::default();
        assert!(!config.has_credentials());
    }

    #[test]
    fn credentials_require_both_values() {
        let config = Config {
            pc_id: "abc".to_string(),
            pc_secret: String::new(),
        };
        assert!(!config.has_credentials());

        let config = Config {
            pc_id: "abc".to_string(),
            pc_secret: "xyz".to_string(),
        };
        assert!(config.has_credentials());
    }
}
