//! Configuration management for the address book driver.
//!
//! Settings are read from environment variables, with an optional `.env`
//! file loaded first. Nothing here is required; every value has a default.

use crate::error::{ConfigError, ConfigResult};
use crate::render::OutputFormat;
use std::env;

/// Configuration for the address book driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Output format for printed books (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let output_format = Self::parse_output_format("ADDRESS_BOOK_OUTPUT")?;

        Ok(Config {
            log_level,
            output_format,
        })
    }

    /// Parse an environment variable as an output format, defaulting to text.
    fn parse_output_format(var_name: &str) -> ConfigResult<OutputFormat> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason,
                }),
            Err(_) => Ok(OutputFormat::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}
