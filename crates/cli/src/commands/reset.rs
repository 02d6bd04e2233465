//! `reset` - restore the vanilla customization.

use anyhow::Result;
use customizer_config::{CustomizeState, SettingsStore};

pub fn run(mut store: SettingsStore) -> Result<()> {
    store.save(&CustomizeState::default())?;
    println!("Customization reset to vanilla");
    Ok(())
}
