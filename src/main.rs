//! account_demo - Account validation walkthrough
//!
//! Runs the fixed deposit/withdraw sequence and reports any rejected
//! operation on stderr. Rejections never change the exit status.

use std::io;

use account_demo::{demo, AppError, Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "account_demo=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout = io::stdout();
    let stderr = io::stderr();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            demo::report(&AppError::from(e), &mut stderr.lock())?;
            return Ok(());
        }
    };

    init_tracing(config.log_format);
    tracing::info!(?config, "Starting account demo");

    let outcome = demo::run(&config, &mut stdout.lock(), &mut stderr.lock())?;

    tracing::info!(
        succeeded = outcome.succeeded(),
        balance = ?outcome.balance,
        "Account demo finished"
    );

    Ok(())
}
