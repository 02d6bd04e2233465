//! Path helpers for the customization config file.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Environment-variable overrides (handled by `SettingsStore::new`).

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the customization file.
///
/// - Linux/macOS: `~/.config/seed-customizer/customize.json`
/// - Windows: `%AppData%\seed-customizer\customize.json`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "seed-customizer")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("customize.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_matches_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "seed-customizer")
            .unwrap()
            .config_dir()
            .join("customize.json");

        assert_eq!(default_config_path().unwrap(), expected);
    }
}
