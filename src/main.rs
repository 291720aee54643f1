//! lazybolt - terminal UI for inspecting BOLT 12 withdrawal requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tokio::io::AsyncReadExt;

mod commands;
mod constants;
mod domain;
mod locale;
mod logging;
mod state;
mod store;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::domain::{DomainError, WithdrawalRequest, format_timestamp_in};
use crate::state::{App, AppConfig, Route};
use crate::store::{JsonFileStore, KeyValueStore};

// lazybolt version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// lazybolt - terminal UI for Lightning BOLT 12 withdrawal requests
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Key-value store file (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the detail view for a withdrawal request JSON file ("-" reads stdin)
    View {
        /// Request JSON file
        file: PathBuf,
    },
    /// Record the creation timestamp of a withdrawal request
    Stamp {
        /// Request JSON file
        file: PathBuf,
        /// Timestamp in milliseconds since the epoch (defaults to now)
        #[arg(long, value_name = "MS")]
        at: Option<i64>,
    },
    /// Display version information
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("warning: logging disabled: {err}");
    }

    match cli.command {
        Commands::Version => {
            println!("lazybolt v{VERSION}");
            println!("A terminal UI for Lightning BOLT 12 withdrawal requests");
            Ok(())
        }
        Commands::Stamp { file, at } => {
            let config = AppConfig::load();
            let request = load_request(&file).await?;
            let store = open_store(cli.store, &config)?;
            stamp(&store, &request, at).await
        }
        Commands::View { file } => {
            let config = AppConfig::load();
            let request = load_request(&file).await?;
            let store = open_store(cli.store, &config)?;
            run_view(request, store, config).await
        }
    }
}

/// Runs the TUI with the withdrawal view as the root screen.
async fn run_view(
    request: WithdrawalRequest,
    store: JsonFileStore,
    config: AppConfig,
) -> Result<()> {
    tracing::info!(invreq_id = %request.invreq_id, store = %store.path().display(), "opening view");

    let root = Route::Withdrawal {
        withdrawal_request: request,
    };
    let mut terminal = tui::init()?;
    let mut app = App::new(root, Arc::new(store), config).with_config_persistence();
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Stores `at` (or now) under the request's timestamp key.
async fn stamp(
    store: &dyn KeyValueStore,
    request: &WithdrawalRequest,
    at: Option<i64>,
) -> Result<()> {
    let key = request
        .timestamp_key()
        .ok_or_else(|| eyre!("request {} has no bolt12 payload", request.invreq_id))?;
    let millis = at.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

    store
        .set_item(&key, &millis.to_string())
        .await
        .wrap_err_with(|| format!("failed to write {key}"))?;
    tracing::info!(%key, millis, "timestamp recorded");

    let when = format_timestamp_in(millis, &chrono::Local).unwrap_or_else(|| millis.to_string());
    println!("Recorded {} at {when}", request.invreq_id);
    Ok(())
}

/// Reads and decodes the request JSON from `path`, or stdin for `-`.
async fn load_request(path: &Path) -> Result<WithdrawalRequest> {
    let raw = if path == Path::new("-") {
        let mut raw = String::new();
        tokio::io::stdin().read_to_string(&mut raw).await?;
        raw
    } else {
        tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read {}", path.display()))?
    };

    if raw.trim().is_empty() {
        return Err(DomainError::missing_request("WithdrawalView").into());
    }
    WithdrawalRequest::from_json(&raw)
        .wrap_err_with(|| format!("invalid withdrawal request in {}", path.display()))
}

/// Store precedence: `--store`, then the configured path, then the data dir.
fn open_store(cli_store: Option<PathBuf>, config: &AppConfig) -> Result<JsonFileStore> {
    match cli_store.or_else(|| config.store_path.clone()) {
        Some(path) => Ok(JsonFileStore::new(path)),
        None => Ok(JsonFileStore::open_default()?),
    }
}

// ============================================================================
// Tests
// ============================================================================
