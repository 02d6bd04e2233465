//! `show` - print the saved customization.

use anyhow::Result;
use customizer_config::SettingsStore;

use super::print_bindings;

pub fn run(store: &SettingsStore) -> Result<()> {
    let state = store.state();

    println!("Customization file: {}", store.path().display());
    println!();
    println!(
        "Sprite:       {} ({})",
        state.sprite,
        if state.custom_sprite { "custom" } else { "default" }
    );
    println!(
        "Energy color: #{} ({})",
        state.energy_color,
        if state.custom_energy_color {
            "custom"
        } else {
            "default"
        }
    );
    println!("Moonwalk:     {}", if state.moonwalk { "on" } else { "off" });
    println!();
    println!("Controller bindings:");
    print_bindings(state);

    if !state.spin_lock_buttons.is_empty() {
        let buttons: Vec<String> = state
            .spin_lock_buttons
            .iter()
            .map(|b| b.to_string())
            .collect();
        println!();
        println!("Spin lock:    {}", buttons.join(" + "));
    }
    if !state.quick_reload_buttons.is_empty() {
        let buttons: Vec<String> = state
            .quick_reload_buttons
            .iter()
            .map(|b| b.to_string())
            .collect();
        println!("Quick reload: {}", buttons.join(" + "));
    }

    Ok(())
}
