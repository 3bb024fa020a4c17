//! Logging setup for the command line client
//!
//! Logs go to stderr so stdout only carries the search result:
//! - Human readable output by default
//! - JSON lines with `--log-json`
//! - `RUST_LOG` overrides the verbosity flag

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn level_from_verbosity(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Install the global subscriber
pub fn init_telemetry(verbosity: u8, json: bool) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .from_env_lossy();

    let fmt_layer = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(verbosity, json, "Telemetry initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), tracing::Level::ERROR);
        assert_eq!(level_from_verbosity(2), tracing::Level::INFO);
        assert_eq!(level_from_verbosity(3), tracing::Level::DEBUG);
        assert_eq!(level_from_verbosity(9), tracing::Level::TRACE);
    }
}
