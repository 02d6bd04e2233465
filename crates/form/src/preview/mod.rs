//! View models for the page's rendering collaborators.
//!
//! Responsibilities:
//! - Derive what each renderer needs from the stored form values.
//!
//! Non-responsibilities:
//! - Touching the DOM, files, or any other output surface.
//!
//! Invariants:
//! - Re-rendering from the same state yields byte-identical output.

mod energy;
mod sprite;

pub use energy::{EnergyPreview, energy_cell_svg, energy_preview};
pub use sprite::{SpriteGalleryView, SpriteTile, sprite_gallery};
