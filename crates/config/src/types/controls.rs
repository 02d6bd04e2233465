//! Controller action and button types.
//!
//! Responsibilities:
//! - Define the closed set of remappable game actions (`GameAction`).
//! - Define controller button identifiers (`PadButton`) and their parsing.
//! - Define `ControllerBindings`, the action-to-button assignment table.
//!
//! Does NOT handle:
//! - Reassignment and conflict swapping (see `remap` module at crate root).
//! - Persistence of the assignment table (see `persistence` module).
//!
//! Invariants:
//! - `GameAction::ALL` is the canonical scan order for conflict resolution.
//! - Every action's serialized identifier is the form field key it is
//!   stored under.
//! - Action bindings draw from `PadButton::ASSIGNABLE`; Start is reserved
//!   for pause and the D-pad for movement.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A remappable game action.
///
/// The set is closed and known at compile time; each action holds exactly
/// one assigned controller button at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GameAction {
    Shot,
    Jump,
    Dash,
    ItemSelect,
    ItemCancel,
    AngleUp,
    AngleDown,
}

impl GameAction {
    /// All remappable actions, in the canonical conflict-scan order.
    pub const ALL: [GameAction; 7] = [
        GameAction::Shot,
        GameAction::Jump,
        GameAction::Dash,
        GameAction::ItemSelect,
        GameAction::ItemCancel,
        GameAction::AngleUp,
        GameAction::AngleDown,
    ];

    /// The settings-store field key for this action.
    pub fn field_key(self) -> &'static str {
        match self {
            Self::Shot => "shot",
            Self::Jump => "jump",
            Self::Dash => "dash",
            Self::ItemSelect => "item_select",
            Self::ItemCancel => "item_cancel",
            Self::AngleUp => "angle_up",
            Self::AngleDown => "angle_down",
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_key())
    }
}

/// Error returned when an action name cannot be parsed.
#[derive(Debug, Error, PartialEq)]
#[error("Unknown action name: '{name}'")]
pub struct ParseActionError {
    /// The unrecognized action name.
    pub name: String,
}

impl FromStr for GameAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept hyphenated spellings from the command line.
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "shot" | "shoot" => Ok(Self::Shot),
            "jump" => Ok(Self::Jump),
            "dash" => Ok(Self::Dash),
            "item_select" => Ok(Self::ItemSelect),
            "item_cancel" => Ok(Self::ItemCancel),
            "angle_up" => Ok(Self::AngleUp),
            "angle_down" => Ok(Self::AngleDown),
            _ => Err(ParseActionError {
                name: s.to_string(),
            }),
        }
    }
}

/// A controller button identifier.
///
/// Equality-comparable and otherwise opaque to the reassignment core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PadButton {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    L,
    R,
    Select,
    Start,
}

impl PadButton {
    /// Buttons offered for action bindings. Exactly as many as there are
    /// actions, so a valid binding table is a bijection.
    pub const ASSIGNABLE: [PadButton; 7] = [
        PadButton::A,
        PadButton::B,
        PadButton::X,
        PadButton::Y,
        PadButton::L,
        PadButton::R,
        PadButton::Select,
    ];

    /// Returns true if this button may be bound to an action.
    pub fn is_assignable(self) -> bool {
        Self::ASSIGNABLE.contains(&self)
    }
}

impl fmt::Display for PadButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::L => "L",
            Self::R => "R",
            Self::Select => "Select",
            Self::Start => "Start",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a button name cannot be parsed.
#[derive(Debug, Error, PartialEq)]
#[error("Unknown button name: '{name}'")]
pub struct ParseButtonError {
    /// The unrecognized button name.
    pub name: String,
}

impl FromStr for PadButton {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "l" => Ok(Self::L),
            "r" => Ok(Self::R),
            "select" => Ok(Self::Select),
            "start" => Ok(Self::Start),
            _ => Err(ParseButtonError {
                name: s.to_string(),
            }),
        }
    }
}

/// The action-to-button assignment table.
///
/// Maps every remappable action to its assigned button. The table is kept
/// injective by the `remap` module; this type itself only stores
/// assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerBindings {
    assignments: BTreeMap<GameAction, PadButton>,
}

impl ControllerBindings {
    /// The stock layout: shot on X, jump on A, dash on B, item select on
    /// Select, item cancel on Y, angle up on R, angle down on L.
    pub fn vanilla() -> Self {
        let assignments = BTreeMap::from([
            (GameAction::Shot, PadButton::X),
            (GameAction::Jump, PadButton::A),
            (GameAction::Dash, PadButton::B),
            (GameAction::ItemSelect, PadButton::Select),
            (GameAction::ItemCancel, PadButton::Y),
            (GameAction::AngleUp, PadButton::R),
            (GameAction::AngleDown, PadButton::L),
        ]);
        Self { assignments }
    }

    /// Builds a table from explicit pairs. Later pairs overwrite earlier
    /// ones for the same action.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (GameAction, PadButton)>) -> Self {
        Self {
            assignments: pairs.into_iter().collect(),
        }
    }

    /// The button currently assigned to an action, if any.
    pub fn get(&self, action: GameAction) -> Option<PadButton> {
        self.assignments.get(&action).copied()
    }

    /// Assigns a button to an action, replacing any previous assignment.
    pub fn set(&mut self, action: GameAction, button: PadButton) {
        self.assignments.insert(action, button);
    }

    /// Iterates assignments in action order.
    pub fn iter(&self) -> impl Iterator<Item = (GameAction, PadButton)> + '_ {
        self.assignments.iter().map(|(&a, &b)| (a, b))
    }

    /// Number of assigned actions.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if no action has an assignment.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl Default for ControllerBindings {
    fn default() -> Self {
        Self::vanilla()
    }
}
