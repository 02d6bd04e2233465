//! Command implementations.
//!
//! One module per subcommand; each exposes a `run` function that operates
//! on an opened `SettingsStore` and prints to stdout.

pub mod palette;
pub mod rebind;
pub mod reset;
pub mod show;
pub mod sprite;

use customizer_config::{CustomizeState, GameAction};

/// Prints the binding table, one action per line.
pub(crate) fn print_bindings(state: &CustomizeState) {
    for action in GameAction::ALL {
        match state.bindings.get(action) {
            Some(button) => println!("  {:<12} {}", action.field_key(), button),
            None => println!("  {:<12} (unassigned)", action.field_key()),
        }
    }
}
