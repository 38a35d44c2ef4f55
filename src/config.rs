//! Configuration module
//!
//! Loads demo amounts and logging options from environment variables.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Balance the demo account is opened with
    pub initial_balance: Decimal,

    /// Amount deposited after opening
    pub deposit: Decimal,

    /// Amount withdrawn after the deposit
    pub withdrawal: Decimal,

    /// Final withdrawal, expected to exceed the balance
    pub overdraft: Decimal,

    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_balance: Decimal::new(1000, 1),
            deposit: Decimal::new(500, 1),
            withdrawal: Decimal::new(300, 1),
            overdraft: Decimal::new(1500, 1),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let amount = |key: &'static str, default: Decimal| -> Result<Decimal, ConfigError> {
            match lookup(key) {
                Some(raw) => Decimal::from_str(raw.trim())
                    .map_err(|_| ConfigError::InvalidValue(key)),
                None => Ok(default),
            }
        };

        let initial_balance = amount("DEMO_INITIAL_BALANCE", defaults.initial_balance)?;
        let deposit = amount("DEMO_DEPOSIT", defaults.deposit)?;
        let withdrawal = amount("DEMO_WITHDRAWAL", defaults.withdrawal)?;
        let overdraft = amount("DEMO_OVERDRAFT", defaults.overdraft)?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.trim().parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            initial_balance,
            deposit,
            withdrawal,
            overdraft,
            log_format,
        })
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
