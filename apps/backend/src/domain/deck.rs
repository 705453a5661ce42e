//! Deck construction: the canonical 78-card sequence and its themed subsets.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{MAJOR_ARCANA, MINOR_RANKS};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub const FULL_DECK_SIZE: usize = 78;

/// Build the full 78-card deck in canonical order: the 22 Major Arcana,
/// then Wands, Cups, Swords and Pentacles from Ace to King.
///
/// Generated from the naming tables so no card can be skipped or mistyped.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(FULL_DECK_SIZE);
    for (rank, name) in MAJOR_ARCANA.iter().enumerate() {
        deck.push(Card::new(*name, Suit::Major, rank as u8));
    }
    for suit in Suit::MINOR {
        for (idx, rank_name) in MINOR_RANKS.iter().enumerate() {
            deck.push(Card::new(
                format!("{rank_name} of {suit}"),
                suit,
                idx as u8 + 1,
            ));
        }
    }
    deck
}

static CANONICAL_DECK: Lazy<Vec<Card>> = Lazy::new(build_deck);

/// The process-wide immutable deck.
pub fn canonical_deck() -> &'static [Card] {
    &CANONICAL_DECK
}

/// Look a card up by name, ignoring case and surrounding whitespace.
pub fn card_by_name(name: &str) -> Option<&'static Card> {
    let wanted = name.trim();
    canonical_deck()
        .iter()
        .find(|card| card.name().eq_ignore_ascii_case(wanted))
}

/// Which cards a session draws from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckVariant {
    /// All 78 cards.
    #[default]
    Full,
    /// The 22 Major Arcana only.
    MajorArcana,
    /// The Major Arcana followed by the four Aces.
    MajorsAndAces,
}

impl DeckVariant {
    pub const ALL: [DeckVariant; 3] = [
        DeckVariant::Full,
        DeckVariant::MajorArcana,
        DeckVariant::MajorsAndAces,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeckVariant::Full => "full",
            DeckVariant::MajorArcana => "major-arcana",
            DeckVariant::MajorsAndAces => "majors-and-aces",
        }
    }

    fn includes(self, card: &Card) -> bool {
        match self {
            DeckVariant::Full => true,
            DeckVariant::MajorArcana => card.is_major(),
            DeckVariant::MajorsAndAces => card.is_major() || card.is_ace(),
        }
    }

    /// The variant's cards, in canonical deck order.
    pub fn cards(self) -> Vec<Card> {
        canonical_deck()
            .iter()
            .filter(|card| self.includes(card))
            .cloned()
            .collect()
    }

    pub fn size(self) -> usize {
        canonical_deck()
            .iter()
            .filter(|card| self.includes(card))
            .count()
    }
}

impl fmt::Display for DeckVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeckVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DeckVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::UnknownDeck, format!("Unknown deck: {s}"))
            })
    }
}
