//! `rebind` - assign a button to an action, swapping on conflict.

use anyhow::{Context, Result, bail};
use customizer_config::{GameAction, PadButton, SettingsStore};
use customizer_form::{CustomizeForm, FormEvent};

use super::print_bindings;

pub fn run(store: SettingsStore, action: &str, button: &str) -> Result<()> {
    let action: GameAction = action
        .parse()
        .with_context(|| format!("'{}' is not a remappable action", action))?;
    let button: PadButton = button
        .parse()
        .with_context(|| format!("'{}' is not a controller button", button))?;

    if !button.is_assignable() {
        let assignable: Vec<String> = PadButton::ASSIGNABLE
            .iter()
            .map(|b| b.to_string())
            .collect();
        bail!(
            "Button '{}' cannot be bound to an action; choose one of: {}",
            button,
            assignable.join(", ")
        );
    }

    let state = store.state().clone();
    let mut form = CustomizeForm::new(state, Vec::new(), store);
    let displaced = form.apply(FormEvent::ButtonReassigned { action, button })?;

    match displaced {
        Some(partner) => println!(
            "Assigned {} to {}; {} took over the vacated button",
            button, action, partner
        ),
        None => println!("Assigned {} to {}", button, action),
    }
    println!();
    print_bindings(form.state());

    Ok(())
}
