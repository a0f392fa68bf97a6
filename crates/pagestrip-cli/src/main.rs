use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagestrip_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagestrip")]
#[command(author, version, about = "Horizontally paged, snap-to-page terminal view")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/pagestrip/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive demo host
    Run {
        /// Number of pages in the model
        #[arg(short = 'p', long, default_value_t = 6)]
        pages: usize,
        /// Initial page index (clamped into range)
        #[arg(short = 's', long, default_value_t = 0)]
        start: usize,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Also write it to the config file, creating the directory if needed
        #[arg(short = 'w', long)]
        write: bool,
    },
    /// Drive a strip without a terminal and print every settle
    Simulate {
        #[arg(short = 'p', long, default_value_t = 3)]
        pages: usize,
        #[arg(short = 's', long, default_value_t = 0)]
        start: usize,
        /// Page index to request; repeat for several requests
        #[arg(short = 't', long = "to")]
        targets: Vec<usize>,
        /// Frame length in milliseconds
        #[arg(long, default_value_t = 16)]
        step_ms: u64,
        /// Time to let pass between requests, in milliseconds
        #[arg(long, default_value_t = 0)]
        gap_ms: u64,
        /// Replace the model with this many pages after the requests
        #[arg(long)]
        replace_with: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AppConfig::load()?,
    };
    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run { pages, start }) => {
            init_file_logging(&config)?;
            commands::run::run(config, pages, start)
        }
        None => {
            init_file_logging(&config)?;
            commands::run::run(config, 6, 0)
        }
        Some(Commands::Config { write }) => {
            init_logging(&config);
            commands::config::run(&config, write, cli.config.as_deref())
        }
        Some(Commands::Simulate {
            pages,
            start,
            targets,
            step_ms,
            gap_ms,
            replace_with,
        }) => {
            init_logging(&config);
            let plan = commands::simulate::Plan {
                pages,
                start,
                targets,
                step_ms,
                gap_ms,
                replace_with,
            };
            commands::simulate::run(&config, &plan)
        }
    }
}

fn env_filter(config: &AppConfig) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    )
}

/// Log to stderr for the headless subcommands
fn init_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Log to a file while the terminal UI owns the screen
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_dir = AppConfig::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join("pagestrip.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("cannot open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}
