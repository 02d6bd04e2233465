//! Configuration management for the seed customizer.
//!
//! This crate provides the customization domain types (actions, buttons,
//! sprites, palette colors), the button-reassignment core, and persistence
//! of the customization state to a platform-standard config file.

pub mod constants;
pub mod persistence;
pub mod remap;
pub mod types;

pub use persistence::{ConfigFileError, CustomizeState, SettingsStore};
pub use remap::{RemapError, reassign_button, verify_injective};
pub use types::{
    ControllerBindings, GameAction, PadButton, PaletteColor, PaletteError, SpriteCategory,
    SpriteInfo,
};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CUSTOMIZER_CONFIG_PATH";

/// Returns the value of an environment variable, treating empty or
/// whitespace-only values as unset.
pub fn env_var_or_none(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
