//! Loading and saving the customization state.
//!
//! Responsibilities:
//! - Resolve the config file location (explicit path, env override, or
//!   platform default).
//! - Load the saved state, recovering from corrupt files.
//! - Atomic save operations.
//!
//! Does NOT handle:
//! - Path determination details (uses the path module).
//! - State type definitions (see `state.rs`).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - A corrupt config file is backed up and replaced with defaults rather
//!   than failing startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::create_corrupt_backup;
use super::path::default_config_path;
use super::state::{ConfigFileError, CustomizeState, read_state_file};
use crate::{CONFIG_PATH_ENV, env_var_or_none};

/// Manages loading and saving the customization state on disk.
pub struct SettingsStore {
    /// Path to the customization file.
    config_path: PathBuf,
    /// Cached state, as last loaded or saved.
    state: CustomizeState,
}

impl SettingsStore {
    /// Creates a store at the platform-standard config path.
    ///
    /// If the `CUSTOMIZER_CONFIG_PATH` environment variable is set (and not
    /// empty/whitespace), it is used instead of the default path.
    ///
    /// # Errors
    /// Returns an error if the platform config directory cannot be
    /// determined (should be rare).
    pub fn new() -> Result<Self> {
        let config_path = if let Some(path_str) = env_var_or_none(CONFIG_PATH_ENV) {
            PathBuf::from(path_str)
        } else {
            default_config_path()?
        };

        Ok(Self::new_with_path(config_path))
    }

    /// Creates a store with a specific config file path.
    ///
    /// If the file exists but cannot be read or parsed, it is backed up
    /// with a `.corrupt.{timestamp}` extension and defaults are used
    /// instead. This prevents data loss while letting the application
    /// start.
    pub fn new_with_path(config_path: PathBuf) -> Self {
        let state = if config_path.exists() {
            match read_state_file(&config_path) {
                Ok(state) => state,
                Err(e) => {
                    let is_not_found = matches!(
                        &e,
                        ConfigFileError::Read { source, .. }
                            if source.kind() == std::io::ErrorKind::NotFound
                    );

                    if !is_not_found {
                        match create_corrupt_backup(&config_path) {
                            Ok(backup_path) => {
                                tracing::warn!(
                                    path = %config_path.display(),
                                    backup_path = %backup_path.display(),
                                    error = %e,
                                    "Customization file is corrupt, backed up and using defaults"
                                );
                            }
                            Err(backup_err) => {
                                tracing::error!(
                                    path = %config_path.display(),
                                    error = %e,
                                    backup_error = %backup_err,
                                    "Customization file is corrupt and backup failed, using defaults"
                                );
                            }
                        }
                    }
                    CustomizeState::default()
                }
            }
        } else {
            CustomizeState::default()
        };

        Self { config_path, state }
    }

    /// The config file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// The state as last loaded or saved.
    pub fn state(&self) -> &CustomizeState {
        &self.state
    }

    /// Saves the given state to disk, replacing the cached copy.
    pub fn save(&mut self, state: &CustomizeState) -> Result<()> {
        self.state = state.clone();
        self.atomic_save()
    }

    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        // Write to a temporary file first, then rename into place.
        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&temp_path, content)
            .context("Failed to write temporary customization file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary customization file")?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Customization saved atomically"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameAction, PadButton};
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> SettingsStore {
        SettingsStore::new_with_path(dir.path().join("customize.json"))
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        assert_eq!(store.state(), &CustomizeState::default());
    }

    #[test]
    fn test_save_then_reload() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);

        let mut state = CustomizeState::default();
        state.sprite = "aster".to_string();
        state.bindings.set(GameAction::Shot, PadButton::L);
        state.bindings.set(GameAction::AngleDown, PadButton::X);
        store.save(&state).unwrap();

        let reloaded = temp_store(&dir);
        assert_eq!(reloaded.state(), &state);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("customize.json");
        let mut store = SettingsStore::new_with_path(nested.clone());

        store.save(&CustomizeState::default()).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        store.save(&CustomizeState::default()).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_corrupt_file_backed_up_and_defaulted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customize.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::new_with_path(path.clone());
        assert_eq!(store.state(), &CustomizeState::default());

        // The original content survives under a .corrupt.* name.
        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".corrupt."))
            .collect();
        assert_eq!(backups.len(), 1);
        let backup_content = std::fs::read_to_string(backups[0].path()).unwrap();
        assert_eq!(backup_content, "{ not json");
    }

    #[test]
    fn test_env_override_selects_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elsewhere.json");
        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_str().unwrap()), || {
            let store = SettingsStore::new().unwrap();
            assert_eq!(store.path(), path.as_path());
        });
    }
}
