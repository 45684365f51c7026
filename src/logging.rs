//! Logging initialization for the `comprehend` binary.
//!
//! Logs go to STDERR so STDOUT stays clean for JSON output. `RUST_LOG` is
//! honoured unless `--verbose` forces `debug`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
