//! Seed customizer CLI - edit the saved game customization.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Open the settings store and dispatch to the command modules.
//!
//! Does NOT handle:
//! - Customization domain logic (see `customizer-config` and
//!   `customizer-form`).
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so clap env defaults can read it.
//! - Logging goes to stderr; stdout is reserved for command output.

mod args;
mod commands;

use std::path::PathBuf;

use args::{Cli, Commands};
use clap::Parser;
use customizer_config::SettingsStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values.
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = open_store(cli.config_path)?;

    match cli.command {
        Commands::Show => commands::show::run(&store),
        Commands::Sprite { name } => commands::sprite::run(store, &name),
        Commands::Palette { color } => commands::palette::run(store, &color),
        Commands::Rebind { action, button } => commands::rebind::run(store, &action, &button),
        Commands::Reset => commands::reset::run(store),
    }
}

fn open_store(config_path: Option<PathBuf>) -> anyhow::Result<SettingsStore> {
    let store = match config_path {
        Some(path) => SettingsStore::new_with_path(path),
        None => SettingsStore::new()?,
    };
    tracing::debug!(path = %store.path().display(), "Opened settings store");
    Ok(store)
}

/// Loads `.env` if present; a missing file is not an error.
fn load_dotenv() -> Result<(), dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
