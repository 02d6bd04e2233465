//! The customization form controller.
//!
//! Responsibilities:
//! - Apply `FormEvent`s to the owned `CustomizeState`.
//! - Route `ButtonReassigned` through the remap core over the full action
//!   list.
//! - Fire the `SaveSink` once per successful mutation.
//!
//! Does NOT handle:
//! - Rendering (see `preview`) or event capture (external).
//!
//! Invariants:
//! - A rejected edit (validation or remap failure) leaves the state
//!   unchanged and fires no save.
//! - A save failure does not roll back the in-memory mutation; persistence
//!   is fire-and-forget from the form's perspective.

use customizer_config::types::find_sprite;
use customizer_config::{
    CustomizeState, GameAction, PadButton, RemapError, SpriteCategory, reassign_button,
};
use thiserror::Error;

use crate::event::FormEvent;
use crate::save::SaveSink;

/// Errors that can occur when applying a form event.
#[derive(Debug, Error)]
pub enum FormError {
    /// The selected sprite is not in the gallery catalog.
    #[error("Unknown sprite '{name}': not in the catalog")]
    UnknownSprite {
        /// The rejected sprite name.
        name: String,
    },

    /// The reassignment was rejected by the remap core.
    #[error(transparent)]
    Remap(#[from] RemapError),

    /// The state mutation applied but the sink failed to persist it.
    #[error("Failed to persist customization: {0}")]
    Save(anyhow::Error),
}

/// The form controller: owns the working state, the sprite catalog, and
/// the persistence sink.
pub struct CustomizeForm<S> {
    state: CustomizeState,
    catalog: Vec<SpriteCategory>,
    sink: S,
}

impl<S: SaveSink> CustomizeForm<S> {
    /// Creates a form over previously loaded state.
    ///
    /// An empty catalog disables sprite-name validation (the page always
    /// supplies its gallery; headless callers may not have one).
    pub fn new(state: CustomizeState, catalog: Vec<SpriteCategory>, sink: S) -> Self {
        Self {
            state,
            catalog,
            sink,
        }
    }

    /// The current form state.
    pub fn state(&self) -> &CustomizeState {
        &self.state
    }

    /// The gallery catalog this form validates against.
    pub fn catalog(&self) -> &[SpriteCategory] {
        &self.catalog
    }

    /// Consumes the form, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Applies one user edit, then notifies the persistence sink.
    ///
    /// Returns the action whose button was swapped away, for
    /// `ButtonReassigned` events that displaced a previous holder; `None`
    /// otherwise.
    pub fn apply(&mut self, event: FormEvent) -> Result<Option<GameAction>, FormError> {
        let mut displaced = None;
        match event {
            FormEvent::SpriteToggled { enabled } => {
                self.state.custom_sprite = enabled;
            }
            FormEvent::SpriteSelected { name } => {
                if !self.catalog.is_empty() && find_sprite(&self.catalog, &name).is_none() {
                    return Err(FormError::UnknownSprite { name });
                }
                self.state.sprite = name;
            }
            FormEvent::EnergyColorToggled { enabled } => {
                self.state.custom_energy_color = enabled;
            }
            FormEvent::EnergyColorSelected { color } => {
                self.state.energy_color = color;
            }
            FormEvent::ButtonReassigned { action, button } => {
                displaced =
                    reassign_button(&GameAction::ALL, action, button, &mut self.state.bindings)?;
            }
            FormEvent::SpinLockToggled { button, enabled } => {
                toggle_button(&mut self.state.spin_lock_buttons, button, enabled);
            }
            FormEvent::QuickReloadToggled { button, enabled } => {
                toggle_button(&mut self.state.quick_reload_buttons, button, enabled);
            }
            FormEvent::MoonwalkToggled { enabled } => {
                self.state.moonwalk = enabled;
            }
        }

        self.sink.save(&self.state).map_err(FormError::Save)?;
        tracing::debug!("Form state saved after mutation");
        Ok(displaced)
    }
}

/// Adds or removes a button from a checkbox-backed list, keeping
/// first-checked order and no duplicates.
fn toggle_button(buttons: &mut Vec<PadButton>, button: PadButton, enabled: bool) {
    if enabled {
        if !buttons.contains(&button) {
            buttons.push(button);
        }
    } else {
        buttons.retain(|&b| b != button);
    }
}
