//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not handle config loading (see `customizer_config`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "customizer-cli")]
#[command(about = "Seed customizer - edit the saved game customization", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  customizer-cli show\n  customizer-cli sprite aster\n  customizer-cli palette 4060ff\n  customizer-cli rebind dash a\n  customizer-cli reset\n"
)]
pub struct Cli {
    /// Path to a custom customization file (overrides default location).
    ///
    /// Can also be set via CUSTOMIZER_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "CUSTOMIZER_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the saved customization
    Show,

    /// Choose the custom sprite by catalog name
    Sprite {
        /// Sprite machine name (e.g. "aster")
        name: String,
    },

    /// Set the energy-cell color
    Palette {
        /// Six hex digits, with or without a leading '#'
        color: String,
    },

    /// Assign a button to an action, swapping with the previous holder
    Rebind {
        /// Action to change (shot, jump, dash, item-select, item-cancel,
        /// angle-up, angle-down)
        action: String,
        /// Button to assign (A, B, X, Y, L, R, Select)
        button: String,
    },

    /// Restore the vanilla customization
    Reset,
}
