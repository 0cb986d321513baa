use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use gocost::cli::{
    handle_copy_categories, handle_export, handle_months, handle_show, month_or_current,
};
use gocost::config::{Config, GocostPaths};
use gocost::export::ExportFormat;
use gocost::storage::Repository;

#[derive(Parser)]
#[command(
    name = "gocost",
    version,
    about = "Terminal-based monthly expense tracker",
    long_about = "gocost tracks monthly incomes and expenses grouped into categories. \
                  Data lives in a single JSON file; run without a command to open \
                  the interactive interface."
)]
struct Cli {
    /// Directory holding config.json and the log (default: ~/.gocost)
    #[arg(long, global = true, env = "GOCOST_HOME")]
    home: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,

    /// List months that have records
    Months,

    /// Show incomes, categories and totals for a month
    Show {
        /// Month key such as August-2024 (default: current month)
        month: Option<String>,
    },

    /// Replace a month's categories with a copy of another month's
    CopyCategories {
        /// Source month key
        from: String,
        /// Destination month key
        to: String,
    },

    /// Export data
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Only export this month
        #[arg(short, long)]
        month: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GocostPaths::new(cli.home.clone())?;
    paths.ensure_base_dir()?;

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    init_logger(&paths, level);

    let config = Config::load_or_create(&paths)?;
    let data_file = config.data_file();
    debug!(data_file = %data_file.display(), currency = %config.currency, "configuration loaded");

    let repository = Repository::open(&data_file, &config.currency)
        .with_context(|| format!("Failed to open {}", data_file.display()))?;

    match cli.command {
        None | Some(Commands::Tui) => {
            gocost::tui::run_tui(&repository, &config)?;
        }
        Some(Commands::Config) => {
            println!("gocost Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Config file:    {}", paths.config_file().display());
            println!("Data file:      {}", data_file.display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:     {}", config.currency);
            println!("  Data dir:     {}", config.data_dir.display());
        }
        Some(Commands::Months) => {
            handle_months(&repository)?;
        }
        Some(Commands::Show { month }) => {
            handle_show(&repository, &month_or_current(month))?;
        }
        Some(Commands::CopyCategories { from, to }) => {
            handle_copy_categories(&repository, &from, &to)?;
        }
        Some(Commands::Export {
            format,
            month,
            output,
        }) => {
            handle_export(&repository, format, month.as_deref(), output)?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber
///
/// The TUI owns the terminal, so log lines go to `gocost.log` in the base
/// directory. `RUST_LOG` overrides `level`.
fn init_logger(paths: &GocostPaths, level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file());

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Ok(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(_) => builder.with_writer(std::io::stderr).init(),
    }
}
