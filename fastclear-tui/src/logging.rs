//! Optional file-backed logging. The terminal stays clean for the UI, so
//! records go nowhere unless a log file is configured.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Route tracing output to `path`; a `None` leaves logging disabled.
///
/// # Errors
///
/// Fails when the log file cannot be opened or a subscriber is already
/// installed.
pub(crate) fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("logging init failed: {err}"))
}
