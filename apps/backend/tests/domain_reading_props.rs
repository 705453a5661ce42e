mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use tarot_backend::domain::prompt::card_line;
use tarot_backend::domain::{
    source_for_seed, DeckVariant, DrawEngine, DrawSettings, PersonaStyle, PromptBuilder,
    SpreadCatalog,
};

fn spread_ids() -> Vec<String> {
    SpreadCatalog::builtin()
        .spreads()
        .iter()
        .map(|s| s.id.clone())
        .collect()
}

fn deck_variant() -> impl Strategy<Value = DeckVariant> {
    prop::sample::select(DeckVariant::ALL.to_vec())
}

fn persona() -> impl Strategy<Value = PersonaStyle> {
    prop::sample::select(PersonaStyle::ALL.to_vec())
}

proptest! {
    #![proptest_config(common::proptest_prelude::proptest_prelude_config())]

    #[test]
    fn prop_complete_readings_are_unique_and_ordered(
        seed in any::<u64>(),
        spread in prop::sample::select(spread_ids()),
        deck in deck_variant(),
        persona in persona(),
    ) {
        let mut engine = DrawEngine::new(
            Arc::new(SpreadCatalog::builtin()),
            DrawSettings { reentry_window: Duration::ZERO, ..DrawSettings::default() },
            source_for_seed(Some(seed)),
        );
        engine.start(&spread, deck, "", persona).unwrap();
        let reading = engine.draw_all().unwrap().clone();

        let allowed: HashSet<String> = deck.cards().iter().map(|c| c.name().to_string()).collect();
        let names: HashSet<&str> = reading.cards().iter().map(|c| c.card.name()).collect();
        prop_assert_eq!(names.len(), reading.required_count());
        for name in &names {
            prop_assert!(allowed.contains(*name));
        }
        let positions: Vec<usize> = reading.cards().iter().map(|c| c.position).collect();
        prop_assert_eq!(positions, (0..reading.required_count()).collect::<Vec<_>>());

        let request = PromptBuilder::default().build_request(&reading, persona);
        let mut last = 0;
        for card in reading.cards() {
            let line = card_line(card);
            prop_assert_eq!(request.user.matches(&line).count(), 1);
            let at = request.user.find(&line).unwrap();
            prop_assert!(at >= last);
            last = at;
        }
    }

    #[test]
    fn prop_same_seed_same_reading(seed in any::<u64>(), spread in prop::sample::select(spread_ids())) {
        let draw = || {
            let mut engine = DrawEngine::new(
                Arc::new(SpreadCatalog::builtin()),
                DrawSettings::default(),
                source_for_seed(Some(seed)),
            );
            engine.start(&spread, DeckVariant::Full, "", PersonaStyle::Classic).unwrap();
            engine.draw_all().unwrap().clone()
        };
        prop_assert_eq!(draw(), draw());
    }
}
