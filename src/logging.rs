//! Log file setup.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<data_dir>/lazybolt/lazybolt.log`. `RUST_LOG` selects the filter and
//! defaults to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::platform::paths::AppPaths;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to the log file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init() -> Result<()> {
    let path = AppPaths::new().log_file()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
