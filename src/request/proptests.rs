//! Property-based tests for request composition
//!
//! These verify the ordering rule holds across all histories: system entry
//! first, history in order, the new user turn exactly once, last.

use super::RequestBuilder;
use crate::completion::Role;
use crate::conversation::{Speaker, Turn};
use crate::policy::Policy;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_speaker() -> impl Strategy<Value = Speaker> {
    prop_oneof![Just(Speaker::User), Just(Speaker::Assistant)]
}

fn arb_turn() -> impl Strategy<Value = Turn> {
    (arb_speaker(), "[a-zA-Z0-9 ]{0,40}").prop_map(|(speaker, text)| Turn { speaker, text })
}

fn arb_history() -> impl Strategy<Value = Vec<Turn>> {
    proptest::collection::vec(arb_turn(), 0..12)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_payload_shape_is_invariant(history in arb_history(), text in "[a-zA-Z0-9 ]{1,30}") {
        let builder = RequestBuilder::new(Policy::new("politica"), "test-model");
        let user_turn = Turn::user(text.clone());

        let request = builder.build(&history, &user_turn);

        prop_assert_eq!(request.model.as_str(), "test-model");
        prop_assert_eq!(request.messages.len(), history.len() + 2);

        prop_assert_eq!(request.messages[0].role, Role::System);
        prop_assert_eq!(request.messages[0].content.as_str(), "politica");

        let last = &request.messages[request.messages.len() - 1];
        prop_assert_eq!(last.role, Role::User);
        prop_assert_eq!(last.content.as_str(), text.as_str());
    }

    #[test]
    fn prop_history_rides_in_order_with_mapped_roles(history in arb_history()) {
        let builder = RequestBuilder::new(Policy::new("politica"), "test-model");
        let request = builder.build(&history, &Turn::user("oi"));

        let middle = &request.messages[1..request.messages.len() - 1];
        prop_assert_eq!(middle.len(), history.len());

        for (entry, turn) in middle.iter().zip(&history) {
            let expected = match turn.speaker {
                Speaker::User => Role::User,
                Speaker::Assistant => Role::Assistant,
            };
            prop_assert_eq!(entry.role, expected);
            prop_assert_eq!(entry.content.as_str(), turn.text.as_str());
        }
    }

    #[test]
    fn prop_builder_never_reads_the_user_turn_from_history(text in "[a-zA-Z0-9 ]{1,30}") {
        // Even when the history already ends with an identical user turn
        // (the echo already appended), the builder adds its argument once.
        let builder = RequestBuilder::new(Policy::new("politica"), "test-model");
        let user_turn = Turn::user(text);
        let history = vec![user_turn.clone()];

        let request = builder.build(&history, &user_turn);

        prop_assert_eq!(request.messages.len(), 3);
        prop_assert_eq!(request.messages[1].content.as_str(), user_turn.text.as_str());
        prop_assert_eq!(request.messages[2].content.as_str(), user_turn.text.as_str());
    }
}
