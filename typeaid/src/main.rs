//! typeaid - drive the predictive grid keyboard from a terminal.
//!
//! Usage:
//!   typeaid                                 # interactive keyboard on stdin
//!   typeaid --data-dir data interactive --json
//!   typeaid suggest th --limit 5
//!   typeaid config > typeaid.toml

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use typeaid_core::{Config, PredictiveSession, VocabularyStore};

mod commands;
mod display;
mod repl;

#[derive(Parser)]
#[command(name = "typeaid")]
#[command(about = "Predictive text entry with a directional-button keyboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the tier word lists (overrides the config file)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Type with the on-screen keyboard, one command per line on stdin
    Interactive {
        /// Print each frame as JSON instead of drawing the grid
        #[arg(long)]
        json: bool,
    },
    /// Print ranked suggestions for a prefix
    Suggest {
        prefix: String,
        /// Number of suggestions (defaults to the configured value)
        #[arg(short, long)]
        limit: Option<u8>,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command.unwrap_or(Commands::Interactive { json: false }) {
        Commands::Config => {
            commands::print_config(&config, io::stdout().lock())?;
        }
        Commands::Suggest { prefix, limit } => {
            let store = open_store(&config)?;
            let limit = limit.unwrap_or(config.max_suggestions);
            commands::suggest(&store, &prefix, limit, io::stdout().lock())?;
        }
        Commands::Interactive { json } => {
            let store = Arc::new(open_store(&config)?);
            let mut session = PredictiveSession::new(store, &config);
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::run(&mut session, stdin.lock(), stdout.lock(), json)?;
            let keyboard = session.into_keyboard();
            info!(chars = keyboard.buffer().len(), "keyboard closed");
        }
    }
    Ok(())
}

fn open_store(config: &Config) -> Result<VocabularyStore> {
    let store = VocabularyStore::open(config).with_context(|| {
        format!(
            "failed to initialise vocabulary from {}",
            config.data_dir.display()
        )
    })?;
    if let Some(msg) = store.status_message() {
        eprintln!("{}", msg);
    }
    Ok(store)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
