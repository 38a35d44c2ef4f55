//! Error handling module
//!
//! Centralized error type and its console rendering.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    // Anything not classified above
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Check if this is a rejected operation rather than an unexpected failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Domain(err) if err.is_client_error())
    }

    /// Render the single line written to the error stream
    pub fn report_line(&self) -> String {
        match self {
            AppError::Domain(err) if err.is_client_error() => format!("Error: {}", err),
            other => format!("Unexpected error: {}", other),
        }
    }
}
