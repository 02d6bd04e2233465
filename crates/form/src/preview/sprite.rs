//! Sprite gallery view model.
//!
//! Derives the gallery highlight flags, the selected sprite's display
//! name, and its image path from stored form values.

use customizer_config::types::find_sprite;
use customizer_config::{CustomizeState, SpriteCategory};

/// One gallery tile.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteTile {
    /// Machine name (form field value).
    pub name: String,
    /// Label shown under the tile.
    pub display_name: String,
    /// Whether this tile carries the highlight.
    pub selected: bool,
}

/// What the gallery renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteGalleryView {
    /// Whether the sprite-selection panel is shown.
    pub visible: bool,
    /// All tiles, in catalog order. At most one is selected.
    pub tiles: Vec<SpriteTile>,
    /// Display name of the selected sprite, when it is in the catalog.
    pub selected_display_name: Option<String>,
    /// Image path for the selected sprite.
    pub selected_image_path: String,
}

/// Builds the gallery view from stored form values.
pub fn sprite_gallery(catalog: &[SpriteCategory], state: &CustomizeState) -> SpriteGalleryView {
    let tiles = catalog
        .iter()
        .flat_map(|category| category.sprites.iter())
        .map(|sprite| SpriteTile {
            name: sprite.name.clone(),
            display_name: sprite.display_name.clone(),
            selected: sprite.name == state.sprite,
        })
        .collect();

    SpriteGalleryView {
        visible: state.custom_sprite,
        tiles,
        selected_display_name: find_sprite(catalog, &state.sprite)
            .map(|sprite| sprite.display_name.clone()),
        selected_image_path: format!("assets/sprites/{}.png", state.sprite),
    }
}
