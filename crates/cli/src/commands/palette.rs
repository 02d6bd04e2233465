//! `palette` - set the energy-cell color.

use anyhow::{Context, Result};
use customizer_config::{PaletteColor, SettingsStore};
use customizer_form::{CustomizeForm, FormEvent};

pub fn run(store: SettingsStore, color: &str) -> Result<()> {
    let color: PaletteColor = color
        .parse()
        .with_context(|| format!("'{}' is not a valid color", color))?;

    let state = store.state().clone();
    let mut form = CustomizeForm::new(state, Vec::new(), store);
    form.apply(FormEvent::EnergyColorToggled { enabled: true })?;
    form.apply(FormEvent::EnergyColorSelected { color })?;

    println!(
        "Energy color set to #{} (console word 0x{:04x})",
        color,
        color.to_bgr555()
    );
    Ok(())
}
