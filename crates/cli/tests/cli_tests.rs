//! End-to-end CLI tests against a temp customization file.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("customizer-cli").unwrap();
    cmd.env(
        "CUSTOMIZER_CONFIG_PATH",
        dir.path().join("customize.json"),
    );
    cmd
}

#[test]
fn show_prints_vanilla_layout_on_fresh_config() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("shot"))
        .stdout(predicate::str::contains("X"))
        .stdout(predicate::str::contains("vanilla"));
}

#[test]
fn rebind_swaps_and_persists() {
    let dir = TempDir::new().unwrap();

    // Dash takes A from jump; jump inherits dash's B.
    cli(&dir)
        .args(["rebind", "dash", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jump took over the vacated button"));

    cli(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("dash         A"))
        .stdout(predicate::str::contains("jump         B"));
}

#[test]
fn rebind_rejects_unassignable_button() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["rebind", "jump", "start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be bound"));
}

#[test]
fn rebind_rejects_unknown_action() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["rebind", "warp", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a remappable action"));
}

#[test]
fn palette_round_trips_through_show() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["palette", "4060ff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#4060ff"));

    cli(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("#4060ff (custom)"));
}

#[test]
fn palette_rejects_bad_color() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["palette", "bluish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid color"));
}

#[test]
fn reset_restores_vanilla() {
    let dir = TempDir::new().unwrap();
    cli(&dir).args(["rebind", "shot", "a"]).assert().success();
    cli(&dir).args(["sprite", "aster"]).assert().success();

    cli(&dir).arg("reset").assert().success();

    cli(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("shot         X"))
        .stdout(predicate::str::contains("Sprite:       vanilla"));
}
