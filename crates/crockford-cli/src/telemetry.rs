//! Log output for the `crockford` binary.
//!
//! Standard output carries command results only, so every span and event is
//! written to stderr. The level is taken from `RUST_LOG` and defaults to
//! `warn`; set `RUST_LOG=crockford=trace` to see the encoder spans.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_line_number(true)
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
