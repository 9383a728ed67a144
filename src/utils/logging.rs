//! Tracing subscriber setup

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides `--log-level`
pub const LOG_ENV: &str = "PATHWISE_LOG";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    File(PathBuf),
    /// Dropped; the full-screen wizard owns the terminal
    Discard,
}

/// Pick the log writer for a run.
///
/// An explicit log file always wins. Without one, interactive runs discard
/// logs because stderr shares the terminal with the wizard.
pub fn log_destination(interactive: bool, log_file: Option<&Path>) -> LogDestination {
    match log_file {
        Some(path) => LogDestination::File(path.to_path_buf()),
        None if interactive => LogDestination::Discard,
        None => LogDestination::Stderr,
    }
}

/// Install the global subscriber
pub fn init_tracing(level: &str, destination: &LogDestination) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match destination {
        LogDestination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogDestination::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogDestination::Discard => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(())
}
