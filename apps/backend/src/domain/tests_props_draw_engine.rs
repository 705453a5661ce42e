//! Property tests for shuffling, the draw engine and prompt construction.
//!
//! Properties tested:
//! - Shuffle preserves the multiset of cards and is reproducible from a seed
//! - Drawing `required_count` times completes the reading with unique cards
//!   at distinct positions
//! - Draws after completion change nothing
//! - The prompt lists every drawn card once, in draw order

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;

use crate::domain::prompt::card_line;
use crate::domain::shuffle::shuffled;
use crate::domain::{
    canonical_deck, test_gens, test_prelude, DrawEngine, DrawOutcome, DrawSettings, DrawState,
    PromptBuilder, RngSource, SpreadCatalog,
};

fn engine(seed: u64, reversal_probability: f64) -> DrawEngine {
    DrawEngine::new(
        Arc::new(SpreadCatalog::builtin()),
        DrawSettings {
            reversal_probability,
            reentry_window: Duration::ZERO,
        },
        Box::new(RngSource::seeded(seed)),
    )
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: shuffle is a permutation, and a seed reproduces it
    #[test]
    fn prop_shuffle_preserves_multiset(seed in any::<u64>()) {
        let deck = canonical_deck();
        let a = shuffled(deck, &mut RngSource::seeded(seed));
        let b = shuffled(deck, &mut RngSource::seeded(seed));
        prop_assert_eq!(&a, &b);

        let mut sorted: Vec<&str> = a.iter().map(|c| c.name()).collect();
        let mut expected: Vec<&str> = deck.iter().map(|c| c.name()).collect();
        sorted.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    /// Property: required_count draws complete the reading with unique cards
    #[test]
    fn prop_draws_complete_with_unique_cards(
        spread in test_gens::spread_id(),
        deck in test_gens::deck_variant(),
        persona in test_gens::persona(),
        question in test_gens::question(),
        seed in any::<u64>(),
        p in 0.0f64..=1.0,
    ) {
        let mut engine = engine(seed, p);
        engine.start(&spread, deck, &question, persona).unwrap();
        let required = engine.remaining();

        for _ in 0..required {
            let outcome = engine.draw_one().unwrap();
            prop_assert!(matches!(outcome, DrawOutcome::Drawn(_)));
        }
        prop_assert_eq!(engine.state(), DrawState::Complete);

        let reading = engine.reading().unwrap();
        prop_assert_eq!(reading.cards().len(), required);
        let mut names: Vec<&str> = reading.cards().iter().map(|c| c.card.name()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), required);
        for (idx, card) in reading.cards().iter().enumerate() {
            prop_assert_eq!(card.position, idx);
            prop_assert!(deck.cards().contains(&card.card));
        }
    }

    /// Property: drawing after completion is a no-op
    #[test]
    fn prop_draw_after_complete_is_noop(
        spread in test_gens::spread_id(),
        seed in any::<u64>(),
        extra in 1usize..5,
    ) {
        let mut engine = engine(seed, 0.4);
        engine.start(&spread, Default::default(), "", Default::default()).unwrap();
        let before = engine.draw_all().unwrap().clone();
        let deck_len = engine.working_deck_len();

        for _ in 0..extra {
            prop_assert_eq!(engine.draw_one(), Ok(DrawOutcome::AlreadyComplete));
        }
        prop_assert_eq!(engine.reading().unwrap(), &before);
        prop_assert_eq!(engine.working_deck_len(), deck_len);
    }

    /// Property: every card line appears once, in draw order
    #[test]
    fn prop_prompt_lists_each_card_once_in_order(
        spread in test_gens::spread_id(),
        persona in test_gens::persona(),
        question in "[a-z ?]{0,30}",
        seed in any::<u64>(),
    ) {
        let mut engine = engine(seed, 0.5);
        engine.start(&spread, Default::default(), &question, persona).unwrap();
        let reading = engine.draw_all().unwrap().clone();
        let request = PromptBuilder::default().build_request(&reading, persona);

        let mut last = 0;
        for card in reading.cards() {
            let line = card_line(card);
            prop_assert_eq!(request.user.matches(line.as_str()).count(), 1);
            let prefix = format!("- {}: ", card.position_label);
            prop_assert_eq!(request.user.matches(prefix.as_str()).count(), 1);
            prop_assert_eq!(request.user.matches(card.card.name()).count(), 1);

            let at = request.user.find(line.as_str()).unwrap();
            prop_assert!(at >= last);
            last = at;
        }
        if question.trim().is_empty() {
            prop_assert!(request.user.contains(crate::domain::DEFAULT_QUESTION));
        }
    }
}
