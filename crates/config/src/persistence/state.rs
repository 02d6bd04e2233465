//! State types and serialization for customization persistence.
//!
//! Responsibilities:
//! - Define the persisted form state (`CustomizeState`).
//! - Define config file errors (`ConfigFileError`).
//! - Read and parse the customization file.
//!
//! Does NOT handle:
//! - Writing config files (handled by `store.rs` via atomic save).
//!
//! Invariants:
//! - Every field is individually defaultable, so files written by older
//!   versions keep loading as fields are added.
//! - Binding-table injectivity is enforced by the `remap` module, not here;
//!   a corrupted file is surfaced when a reassignment is attempted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENERGY_COLOR, DEFAULT_SPRITE_NAME};
use crate::types::{ControllerBindings, PadButton, PaletteColor};

/// The customization form state that persists across sessions.
///
/// Field names double as the settings-store keys; the controller bindings
/// serialize as one field per action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizeState {
    /// Whether the custom-sprite panel is enabled.
    pub custom_sprite: bool,
    /// Machine name of the selected sprite.
    pub sprite: String,
    /// Whether the custom energy-cell color panel is enabled.
    pub custom_energy_color: bool,
    /// Selected energy-cell color.
    pub energy_color: PaletteColor,
    /// Controller button assignments, one per action.
    pub bindings: ControllerBindings,
    /// Buttons that must all be held to lock spin.
    pub spin_lock_buttons: Vec<PadButton>,
    /// Buttons that must all be held to quick-reload the seed.
    pub quick_reload_buttons: Vec<PadButton>,
    /// Whether moonwalking is enabled.
    pub moonwalk: bool,
}

impl Default for CustomizeState {
    fn default() -> Self {
        Self {
            custom_sprite: false,
            sprite: DEFAULT_SPRITE_NAME.to_string(),
            custom_energy_color: false,
            energy_color: PaletteColor::from_hex(DEFAULT_ENERGY_COLOR)
                .unwrap_or(PaletteColor { r: 0, g: 0, b: 0 }),
            bindings: ControllerBindings::vanilla(),
            spin_lock_buttons: Vec::new(),
            quick_reload_buttons: Vec::new(),
            moonwalk: false,
        }
    }
}

/// Errors that can occur when reading the customization file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read customization file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse customization file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the customization file from disk.
pub(crate) fn read_state_file(path: &Path) -> Result<CustomizeState, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
