mod calc;
mod cmd;
mod data;

use calc::error::Direction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jobgate", about = "business-day gate for the daily job-discovery run")]
struct Cli {
    /// Path to the data directory containing config.yaml and holidays.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default config.yaml and holidays.yaml
    Init,
    /// Decide whether the workflow should run on a date
    Check {
        /// Date to evaluate, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Print the decision as a single JSON object
        #[arg(long)]
        json: bool,
    },
    /// Print the next business day after a date
    Next {
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the previous business day before a date
    Prev {
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the run/skip decision for every date in a range
    Schedule {
        /// First date, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last date (inclusive), YYYY-MM-DD
        #[arg(long)]
        to: String,
    },
    /// List all holidays
    Holidays,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    init_tracing()?;

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        tracing::info!(
            dir = %data_dir.display(),
            "data directory is missing or empty, running init"
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Check { date, json }) => cmd::check::run(date.as_deref(), json),
        Some(Commands::Next { date }) => cmd::step::run(date.as_deref(), Direction::Forward),
        Some(Commands::Prev { date }) => cmd::step::run(date.as_deref(), Direction::Backward),
        Some(Commands::Schedule { from, to }) => cmd::schedule::run(&from, &to),
        Some(Commands::Holidays) => cmd::holidays::run(),
    }
}

/// Logs go to stderr so stdout stays clean for `check --json`.
/// RUST_LOG wins over `settings.log_filter`.
fn init_tracing() -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let fallback = data::AppSettings::load()
                .map(|s| s.log_filter)
                .unwrap_or_else(|_| data::AppSettings::default().log_filter);
            EnvFilter::try_new(&fallback)?
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
