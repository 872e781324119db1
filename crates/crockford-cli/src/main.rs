//! `crockford`: generate, checksum and normalize Crockford base32 identifiers.
//!
//! ```bash
//! crockford id --checksum            # 01JN7W80-4X2QM9ZEJ
//! crockford verify "o1jn-7w8o 4x2q-m9ze j"
//! crockford --lowercase md5 < file
//! ```

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use commands::Status;
use config::{CliArgs, Config};
use crockford::SystemClock;
use std::process::ExitCode;
use telemetry::init_telemetry;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    let status = commands::run(&config, &SystemClock, std::io::stdin(), &mut stdout.lock())?;

    Ok(match status {
        Status::Success => ExitCode::SUCCESS,
        Status::Invalid => ExitCode::FAILURE,
    })
}
