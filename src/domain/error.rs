//! Domain Error Types
//!
//! Pure domain errors that don't depend on the console or configuration.

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent rejected balance operations. The display strings are
/// fixed; the offending values are carried for callers that want them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A negative amount was supplied as an initial balance or deposit
    #[error("Illegal balance operation attempted.")]
    IllegalBalance { amount: Decimal },

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds for the requested operation.")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Resulting balance does not fit in a Decimal
    #[error("Balance overflow: {balance} with amount {amount}")]
    Overflow { balance: Decimal, amount: Decimal },
}

impl DomainError {
    /// Create an illegal balance error
    pub fn illegal_balance(amount: Decimal) -> Self {
        Self::IllegalBalance { amount }
    }

    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create an overflow error
    pub fn overflow(balance: Decimal, amount: Decimal) -> Self {
        Self::Overflow { balance, amount }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::IllegalBalance { .. } | Self::InsufficientFunds { .. }
        )
    }

    /// Stable machine-readable tag
    pub fn code(&self) -> &'static str {
        match self {
            Self::IllegalBalance { .. } => "illegal_balance",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::Overflow { .. } => "overflow",
        }
    }
}
