//! Domain module
//!
//! Core domain types and validation rules.

pub mod account;
pub mod error;

pub use account::Account;
pub use error::DomainError;
