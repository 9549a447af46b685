//! Diagnostic logging for the binary.
//!
//! Logs go to a file only. Stdout carries records and stderr carries
//! rejected-line diagnostics, so neither may receive log output.

use std::path::Path;

pub const DEFAULT_LOG_FILE: &str = "/tmp/clf2tab-debug.log";

/// Install a `tracing` subscriber appending to `path`. The filter comes from
/// `RUST_LOG` and defaults to `debug`.
pub fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(path = %path.display(), "clf2tab debug log started");
    Ok(())
}
