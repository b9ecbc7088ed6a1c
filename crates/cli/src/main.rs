//! Operator tool for MU Online warehouse blobs.
//!
//! Reads a blob from a file or stdin, decodes or edits it with
//! `warehouse-core`, and writes results to stdout. Logs go to stderr (and to
//! a file when `WAREHOUSE_LOG_DIR` is set) so stdout stays pipeable.

mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::Parser;
use commands::{Decode, Encode, Inspect, Place, Remove};
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Decode, inspect and edit warehouse blobs
#[derive(Parser)]
#[command(name = "warehouse")]
#[command(about = "Decode, inspect and edit MU Online warehouse blobs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Decode a blob and list its records
    Decode(Decode),

    /// Encode a JSON array of records into a blob
    Encode(Encode),

    /// Show the grid, slot usage and item summaries of a blob
    Inspect(Inspect),

    /// Place a new item and print the updated blob
    Place(Place),

    /// Remove the item covering a cell and print the updated blob
    Remove(Remove),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for WAREHOUSE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    let cli = Cli::parse();

    match cli.command {
        Command::Decode(cmd) => cmd.execute(&config),
        Command::Encode(cmd) => cmd.execute(&config),
        Command::Inspect(cmd) => cmd.execute(&config),
        Command::Place(cmd) => cmd.execute(&config),
        Command::Remove(cmd) => cmd.execute(&config),
    }
}

/// Logs to stderr, plus `warehouse.log` in the log directory when configured.
///
/// The returned guard flushes the file writer when dropped.
fn setup_logging(
    config: &CliConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = tracing_appender::rolling::never(log_dir, "warehouse.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
