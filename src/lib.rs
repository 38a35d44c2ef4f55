//! account_demo Library
//!
//! Re-exports modules for integration testing and external use.

pub mod config;
pub mod demo;
pub mod domain;
mod error;

pub use config::{Config, ConfigError, LogFormat};
pub use demo::DemoOutcome;
pub use domain::{Account, DomainError};
pub use error::{AppError, AppResult};
