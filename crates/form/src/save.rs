//! The persistence collaborator boundary.

use customizer_config::{CustomizeState, SettingsStore};

/// Receives the full form state after every successful mutation.
///
/// The form fires this once per applied event and does not wait on or
/// retry the result; transport and storage are the sink's concern.
pub trait SaveSink {
    /// Persist the current form state.
    fn save(&mut self, state: &CustomizeState) -> anyhow::Result<()>;
}

impl SaveSink for SettingsStore {
    fn save(&mut self, state: &CustomizeState) -> anyhow::Result<()> {
        SettingsStore::save(self, state)
    }
}
