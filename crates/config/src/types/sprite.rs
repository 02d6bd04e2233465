//! Sprite catalog types.
//!
//! Responsibilities:
//! - Describe the selectable sprites and their attribution metadata.
//! - Provide catalog lookup by machine name.
//!
//! Does NOT handle:
//! - Loading sprite image assets (out of scope for this workspace).
//! - Gallery rendering (see the form crate's preview module).

use serde::{Deserialize, Serialize};

/// One selectable sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
    /// Machine name, used as the form field value and asset file stem.
    pub name: String,
    /// Human-readable name shown next to the gallery.
    pub display_name: String,
    /// Name to credit in-game, when it differs from the display name.
    #[serde(default)]
    pub credits_name: Option<String>,
    /// Sprite authors.
    #[serde(default)]
    pub authors: Vec<String>,
}

impl SpriteInfo {
    /// The name to credit for this sprite.
    pub fn credited_as(&self) -> &str {
        self.credits_name.as_deref().unwrap_or(&self.display_name)
    }
}

/// A named group of sprites, as presented in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteCategory {
    /// Category heading.
    pub category_name: String,
    /// Sprites in this category.
    pub sprites: Vec<SpriteInfo>,
}

/// Looks up a sprite by machine name across all categories.
pub fn find_sprite<'a>(categories: &'a [SpriteCategory], name: &str) -> Option<&'a SpriteInfo> {
    categories
        .iter()
        .flat_map(|category| category.sprites.iter())
        .find(|sprite| sprite.name == name)
}
