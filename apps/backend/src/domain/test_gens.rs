// Test doubles and proptest generators for the reading domain.

use std::collections::VecDeque;

use proptest::prelude::*;

use crate::domain::shuffle::RandomSource;
use crate::domain::{DeckVariant, PersonaStyle, SpreadCatalog};

/// Deterministic [`RandomSource`] that replays scripted decisions.
///
/// Once the index script runs out, `index_upto(upper)` returns `upper`, which
/// leaves a Fisher-Yates shuffle as the identity. Flips default to `false`.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    flips: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            flips: VecDeque::new(),
        }
    }

    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips = flips.into_iter().collect();
        self
    }
}

impl RandomSource for ScriptedSource {
    fn index_upto(&mut self, upper: usize) -> usize {
        self.indices.pop_front().map_or(upper, |idx| idx.min(upper))
    }

    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            return false;
        }
        self.flips.pop_front().unwrap_or(false)
    }
}

/// Any builtin spread id.
pub fn spread_id() -> impl Strategy<Value = String> {
    let ids: Vec<String> = SpreadCatalog::builtin()
        .spreads()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    proptest::sample::select(ids)
}

pub fn persona() -> impl Strategy<Value = PersonaStyle> {
    proptest::sample::select(PersonaStyle::ALL.to_vec())
}

pub fn deck_variant() -> impl Strategy<Value = DeckVariant> {
    prop_oneof![
        Just(DeckVariant::Full),
        Just(DeckVariant::MajorArcana),
        Just(DeckVariant::MajorsAndAces),
    ]
}

/// Question text, sometimes blank.
pub fn question() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("   ".to_string()), "[a-zA-Z ?]{1,40}",]
}
