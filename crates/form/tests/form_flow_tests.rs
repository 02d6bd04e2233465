//! Integration tests driving the form controller against the file-backed
//! settings store, the way the page wires it up.

use customizer_config::{CustomizeState, GameAction, PadButton, PaletteColor, SettingsStore};
use customizer_form::preview::{energy_preview, sprite_gallery};
use customizer_form::{CustomizeForm, FormEvent};
use tempfile::TempDir;

#[test]
fn every_edit_lands_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customize.json");

    let store = SettingsStore::new_with_path(path.clone());
    let mut form = CustomizeForm::new(store.state().clone(), Vec::new(), store);

    form.apply(FormEvent::SpriteToggled { enabled: true }).unwrap();
    form.apply(FormEvent::SpriteSelected {
        name: "aster".to_string(),
    })
    .unwrap();
    form.apply(FormEvent::EnergyColorSelected {
        color: PaletteColor::from_hex("4060ff").unwrap(),
    })
    .unwrap();
    let displaced = form
        .apply(FormEvent::ButtonReassigned {
            action: GameAction::Shot,
            button: PadButton::A,
        })
        .unwrap();
    assert_eq!(displaced, Some(GameAction::Jump));

    let reloaded = SettingsStore::new_with_path(path);
    let state = reloaded.state();
    assert!(state.custom_sprite);
    assert_eq!(state.sprite, "aster");
    assert_eq!(state.energy_color.hex(), "4060ff");
    assert_eq!(state.bindings.get(GameAction::Shot), Some(PadButton::A));
    assert_eq!(state.bindings.get(GameAction::Jump), Some(PadButton::X));
}

#[test]
fn previews_reflect_persisted_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customize.json");

    let store = SettingsStore::new_with_path(path.clone());
    let mut form = CustomizeForm::new(store.state().clone(), Vec::new(), store);
    form.apply(FormEvent::EnergyColorToggled { enabled: true })
        .unwrap();
    form.apply(FormEvent::EnergyColorSelected {
        color: PaletteColor::from_hex("c02020").unwrap(),
    })
    .unwrap();

    let reloaded = SettingsStore::new_with_path(path);
    let preview = energy_preview(reloaded.state());
    assert!(preview.visible);
    assert!(preview.svg.contains("#c02020"));

    let gallery = sprite_gallery(&[], reloaded.state());
    assert_eq!(gallery.selected_image_path, "assets/sprites/vanilla.png");
}

#[test]
fn rejected_edit_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customize.json");

    let mut corrupted = CustomizeState::default();
    corrupted.bindings.set(GameAction::Jump, PadButton::X);

    let store = SettingsStore::new_with_path(path.clone());
    let mut form = CustomizeForm::new(corrupted, Vec::new(), store);
    form.apply(FormEvent::ButtonReassigned {
        action: GameAction::Dash,
        button: PadButton::A,
    })
    .unwrap_err();

    // Nothing was written: a fresh store still sees no file.
    assert!(!path.exists());
}
