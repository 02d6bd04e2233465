//! Events arriving from the customization page.

use customizer_config::{GameAction, PadButton, PaletteColor};

/// A user edit, as delivered by the page's form controls.
///
/// Each variant carries exactly what the originating control knows; the
/// form controller supplies everything else from stored state.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The custom-sprite checkbox was toggled.
    SpriteToggled { enabled: bool },
    /// A sprite was picked in the gallery.
    SpriteSelected { name: String },
    /// The custom energy-color checkbox was toggled.
    EnergyColorToggled { enabled: bool },
    /// A color swatch was picked.
    EnergyColorSelected { color: PaletteColor },
    /// One action's button selector was changed.
    ButtonReassigned {
        action: GameAction,
        button: PadButton,
    },
    /// A spin-lock button checkbox was toggled.
    SpinLockToggled { button: PadButton, enabled: bool },
    /// A quick-reload button checkbox was toggled.
    QuickReloadToggled { button: PadButton, enabled: bool },
    /// The moonwalk checkbox was toggled.
    MoonwalkToggled { enabled: bool },
}
