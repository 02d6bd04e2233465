//! Customization type definitions for the seed customizer.
//!
//! Responsibilities:
//! - Define the controller action/button vocabulary and the binding table.
//! - Define the sprite catalog and palette color types.
//!
//! Does NOT handle:
//! - Conflict resolution when buttons are reassigned (see `remap` module at
//!   crate root).
//! - Persistence or state management (see `persistence` module).
//!
//! Invariants:
//! - Serialized identifiers are snake_case and double as settings-store
//!   field keys.
//! - `ControllerBindings` uses `BTreeMap` for deterministic serialization.

mod controls;
mod palette;
mod sprite;

pub use controls::{
    ControllerBindings, GameAction, PadButton, ParseActionError, ParseButtonError,
};
pub use palette::{PaletteColor, PaletteError};
pub use sprite::{SpriteCategory, SpriteInfo, find_sprite};
