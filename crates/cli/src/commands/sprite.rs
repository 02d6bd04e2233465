//! `sprite` - choose the custom sprite.

use anyhow::Result;
use customizer_config::SettingsStore;
use customizer_form::{CustomizeForm, FormEvent};

pub fn run(store: SettingsStore, name: &str) -> Result<()> {
    let state = store.state().clone();
    let mut form = CustomizeForm::new(state, Vec::new(), store);
    form.apply(FormEvent::SpriteToggled { enabled: true })?;
    form.apply(FormEvent::SpriteSelected {
        name: name.to_string(),
    })?;

    println!("Sprite set to {}", form.state().sprite);
    Ok(())
}
