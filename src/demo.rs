//! Demonstration sequence
//!
//! Opens an account, moves money through it, then attempts an overdraft.
//! This is the only place errors are handled: the first failure stops the
//! sequence and is reported on the error stream.

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::Account;
use crate::error::{AppError, AppResult};

/// Result of one demo run
#[derive(Debug, Default)]
pub struct DemoOutcome {
    /// Balance of the account when the sequence stopped, if one was opened
    pub balance: Option<Decimal>,

    /// Error that stopped the sequence, if any
    pub error: Option<AppError>,
}

impl DemoOutcome {
    /// True when every step of the sequence completed
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Run the demo, writing the transcript to `out` and failures to `err`.
///
/// Only a failure to write to `err` is returned; everything else ends up
/// in the outcome.
pub fn run<O, E>(config: &Config, out: &mut O, err: &mut E) -> io::Result<DemoOutcome>
where
    O: Write,
    E: Write,
{
    let mut account = None;
    let result = script(config, &mut account, out);

    let mut outcome = DemoOutcome {
        balance: account.as_ref().map(Account::balance),
        error: None,
    };

    if let Err(e) = result {
        report(&e, err)?;
        outcome.error = Some(e);
    }

    Ok(outcome)
}

/// Write the report line for an error
pub fn report<E: Write>(error: &AppError, err: &mut E) -> io::Result<()> {
    if error.is_client_error() {
        tracing::warn!("operation rejected: {}", error);
    } else {
        tracing::error!("unexpected failure: {}", error);
    }
    writeln!(err, "{}", error.report_line())
}

fn script<O: Write>(config: &Config, slot: &mut Option<Account>, out: &mut O) -> AppResult<()> {
    let account = slot.insert(Account::new(config.initial_balance)?);
    print_balance(out, "Initial balance", account)?;

    account.deposit(config.deposit)?;
    print_balance(out, "After deposit", account)?;

    account.withdraw(config.withdrawal)?;
    print_balance(out, "After withdrawal", account)?;

    account.withdraw(config.overdraft)?;
    tracing::info!(balance = %account.balance(), "overdraft unexpectedly succeeded");

    Ok(())
}

fn print_balance<O: Write>(out: &mut O, label: &str, account: &Account) -> AppResult<()> {
    writeln!(out, "{}: ${}", label, account.balance().normalize())
        .map_err(|e| AppError::Internal(format!("failed to write output: {}", e)))
}
