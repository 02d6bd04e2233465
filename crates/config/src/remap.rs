//! Controller button reassignment.
//!
//! Responsibilities:
//! - Reassign a button to an action while keeping the binding table
//!   injective, swapping with the previous holder on conflict.
//! - Verify binding tables before mutating them.
//!
//! Does NOT handle:
//! - Persisting the table (see `persistence` module).
//! - Deciding which buttons are offered to the user (callers gate on
//!   `PadButton::ASSIGNABLE`).
//!
//! Invariants:
//! - The table is injective over the action list at every observable point
//!   before and after `reassign_button`; it may only be non-injective
//!   transiently inside a single call.
//! - A non-injective or incomplete table on entry is an error, never
//!   silently repaired: applying the swap scan to a corrupted table would
//!   move more than one assignment.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::types::{ControllerBindings, GameAction, PadButton};

/// Errors that can occur when reassigning a button.
///
/// All of these indicate a caller or state-corruption bug rather than a
/// recoverable runtime condition; swallowing them would let two actions
/// collide on one physical button during gameplay.
#[derive(Debug, Error, PartialEq)]
pub enum RemapError {
    /// The changed action is not a member of the action list.
    #[error("Unknown action '{action}': not in the remappable action list")]
    UnknownAction {
        /// The rejected action.
        action: GameAction,
    },

    /// An action in the list has no assignment in the table.
    #[error("No button assigned to action '{action}'")]
    MissingAssignment {
        /// The unassigned action.
        action: GameAction,
    },

    /// Two actions hold the same button on entry.
    #[error("Conflicting assignments: button '{button}' is held by both '{first}' and '{second}'")]
    DuplicateAssignment {
        /// The doubly-held button.
        button: PadButton,
        /// First holder in scan order.
        first: GameAction,
        /// Second holder in scan order.
        second: GameAction,
    },
}

/// Verifies that `bindings` assigns a distinct button to every action in
/// `actions`.
pub fn verify_injective(
    actions: &[GameAction],
    bindings: &ControllerBindings,
) -> Result<(), RemapError> {
    let mut holders: BTreeMap<PadButton, GameAction> = BTreeMap::new();
    for &action in actions {
        let button = bindings
            .get(action)
            .ok_or(RemapError::MissingAssignment { action })?;
        if let Some(&first) = holders.get(&button) {
            return Err(RemapError::DuplicateAssignment {
                button,
                first,
                second: action,
            });
        }
        holders.insert(button, action);
    }
    Ok(())
}

/// Assigns `new_button` to `changed`, swapping with the previous holder if
/// another action already has it.
///
/// The scan order over `actions` is deterministic but does not affect the
/// result: injectivity on entry guarantees at most one holder, and the scan
/// runs the full list rather than relying on an early exit.
///
/// Returns the action whose assignment was swapped away, if any. The table
/// is mutated in place; triggering persistence is the caller's
/// responsibility.
///
/// # Errors
///
/// Fails without mutating the table if `changed` is not in `actions`, or
/// if the table is incomplete or non-injective on entry.
pub fn reassign_button(
    actions: &[GameAction],
    changed: GameAction,
    new_button: PadButton,
    bindings: &mut ControllerBindings,
) -> Result<Option<GameAction>, RemapError> {
    if !actions.contains(&changed) {
        return Err(RemapError::UnknownAction { action: changed });
    }
    verify_injective(actions, bindings)?;

    let old_button = bindings
        .get(changed)
        .ok_or(RemapError::MissingAssignment { action: changed })?;

    let mut displaced = None;
    for &action in actions {
        if action == changed {
            continue;
        }
        if bindings.get(action) == Some(new_button) {
            bindings.set(action, old_button);
            displaced = Some(action);
        }
    }
    bindings.set(changed, new_button);

    if let Some(partner) = displaced {
        tracing::debug!(
            %changed,
            %new_button,
            %partner,
            %old_button,
            "Reassignment swapped the previous holder"
        );
    }
    Ok(displaced)
}
