//! Property-based tests for controller button reassignment.
//!
//! These tests verify the reassignment invariants under randomly generated
//! edit sequences, catching conflict orders that unit tests might not
//! cover.
//!
//! Test coverage:
//! - Injectivity: the binding table stays injective after every call.
//! - No-op idempotence: reassigning an action to its current button
//!   changes nothing.
//! - Order independence: scanning the action list in reverse produces the
//!   same table.
//! - Locality: a call changes at most two assignments.

use proptest::prelude::*;

use customizer_config::{
    ControllerBindings, GameAction, PadButton, reassign_button, verify_injective,
};

/// Strategy for picking one of the remappable actions.
fn action_strategy() -> impl Strategy<Value = GameAction> {
    proptest::sample::select(GameAction::ALL.to_vec())
}

/// Strategy for picking an assignable button.
fn button_strategy() -> impl Strategy<Value = PadButton> {
    proptest::sample::select(PadButton::ASSIGNABLE.to_vec())
}

/// Strategy for a sequence of reassignment requests.
fn edit_sequence_strategy() -> impl Strategy<Value = Vec<(GameAction, PadButton)>> {
    proptest::collection::vec((action_strategy(), button_strategy()), 0..24)
}

proptest! {
    #[test]
    fn injectivity_preserved_across_sequences(edits in edit_sequence_strategy()) {
        let mut bindings = ControllerBindings::vanilla();
        for (action, button) in edits {
            reassign_button(&GameAction::ALL, action, button, &mut bindings).unwrap();
            verify_injective(&GameAction::ALL, &bindings).unwrap();
        }
    }

    #[test]
    fn noop_reassignment_is_identity(
        edits in edit_sequence_strategy(),
        action in action_strategy(),
    ) {
        let mut bindings = ControllerBindings::vanilla();
        for (a, b) in edits {
            reassign_button(&GameAction::ALL, a, b, &mut bindings).unwrap();
        }

        let before = bindings.clone();
        let current = bindings.get(action).unwrap();
        let displaced =
            reassign_button(&GameAction::ALL, action, current, &mut bindings).unwrap();
        prop_assert_eq!(displaced, None);
        prop_assert_eq!(bindings, before);
    }

    #[test]
    fn scan_order_does_not_affect_result(
        action in action_strategy(),
        button in button_strategy(),
    ) {
        let mut reversed_actions = GameAction::ALL;
        reversed_actions.reverse();

        let mut forward = ControllerBindings::vanilla();
        let mut backward = ControllerBindings::vanilla();
        reassign_button(&GameAction::ALL, action, button, &mut forward).unwrap();
        reassign_button(&reversed_actions, action, button, &mut backward).unwrap();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn at_most_two_assignments_change(
        edits in edit_sequence_strategy(),
        action in action_strategy(),
        button in button_strategy(),
    ) {
        let mut bindings = ControllerBindings::vanilla();
        for (a, b) in edits {
            reassign_button(&GameAction::ALL, a, b, &mut bindings).unwrap();
        }

        let before = bindings.clone();
        let displaced =
            reassign_button(&GameAction::ALL, action, button, &mut bindings).unwrap();

        let changed: Vec<_> = GameAction::ALL
            .iter()
            .filter(|&&a| before.get(a) != bindings.get(a))
            .copied()
            .collect();
        prop_assert!(changed.len() <= 2);
        for a in &changed {
            prop_assert!(*a == action || Some(*a) == displaced);
        }

        // The button multiset is unchanged: a swap permutes, never drops.
        let mut before_buttons: Vec<_> =
            GameAction::ALL.iter().map(|&a| before.get(a).unwrap()).collect();
        let mut after_buttons: Vec<_> =
            GameAction::ALL.iter().map(|&a| bindings.get(a).unwrap()).collect();
        before_buttons.sort();
        after_buttons.sort();
        prop_assert_eq!(before_buttons, after_buttons);
    }
}
