//! Persistence of the customization state.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Read and write the customization state (`CustomizeState`) to disk.
//! - Backup corrupt config files before overwriting.
//!
//! Does NOT handle:
//! - Applying form events or enforcing binding invariants (see the form
//!   crate and the `remap` module).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - Corrupt config files are backed up before being overwritten; a
//!   corrupt file never blocks startup.

use std::path::{Path, PathBuf};

mod path;
mod state;
mod store;

pub use state::{ConfigFileError, CustomizeState};
pub use store::SettingsStore;

/// Creates a backup of a corrupt config file before it is overwritten.
///
/// The backup is created by renaming the original file to a path with a
/// `.corrupt.{timestamp}` extension. This preserves the original file
/// contents for potential recovery while preventing the corrupt file from
/// blocking application startup.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
