mod icons;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ui::PayloadSource;

/// Default directory for rolling log files.
const DEFAULT_LOG_DIR: &str = "logs";

/// Command-line arguments for the inventory browser.
#[derive(Parser)]
#[command(name = "stash-tui", about = "Terminal inventory list browser")]
struct Cli {
    /// Path to an item payload file. The built-in demo payload is used
    /// when omitted.
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Number of copies of the base item list shown in the browser.
    #[arg(short, long, default_value_t = 10)]
    scale: usize,
}

/// Get the log directory.
///
/// Priority:
/// 1. `STASH_LOG_DIR` env variable if set
/// 2. `logs` as fallback
fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STASH_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing with file output in the log directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&log_dir, "stash-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("stash browser starting up");

    let source = match cli.items {
        Some(path) => PayloadSource::File(path),
        None => PayloadSource::BuiltIn,
    };
    ui::run_app(source, cli.scale)?;

    tracing::info!("stash browser shutting down");
    Ok(())
}
