//! Core card-related types: Card, Suit and the naming tables the deck is built from.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::domain::{DomainError, ValidationKind};

/// Major Arcana names in canonical order; the index is the card's rank.
pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Minor rank names in canonical order; rank = index + 1 (Ace = 1, King = 14).
pub const MINOR_RANKS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum Suit {
    Major,
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// The four Minor Arcana suits in deck order.
    pub const MINOR: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn is_major(self) -> bool {
        matches!(self, Suit::Major)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Major => "Major",
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(Suit::Major),
            "wands" => Ok(Suit::Wands),
            "cups" => Ok(Suit::Cups),
            "swords" => Ok(Suit::Swords),
            "pentacles" => Ok(Suit::Pentacles),
            _ => Err(DomainError::validation(
                ValidationKind::UnknownCard,
                format!("Unknown suit: {s}"),
            )),
        }
    }
}

/// A tarot card identity. Cards only come out of the deck builder, so the
/// fields are read-only from outside the domain.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Card {
    name: String,
    suit: Suit,
    rank: u8,
}

impl Card {
    pub(crate) fn new(name: impl Into<String>, suit: Suit, rank: u8) -> Self {
        Self {
            name: name.into(),
            suit,
            rank,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// 0..=21 for Major cards, 1..=14 (Ace..King) for Minor cards.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn is_major(&self) -> bool {
        self.suit.is_major()
    }

    pub fn is_ace(&self) -> bool {
        !self.is_major() && self.rank == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_parses_case_insensitively() {
        assert_eq!("cups".parse::<Suit>().unwrap(), Suit::Cups);
        assert_eq!(" Major ".parse::<Suit>().unwrap(), Suit::Major);
        assert!("hearts".parse::<Suit>().is_err());
    }

    #[test]
    fn ace_detection_ignores_major_rank_one() {
        let magician = Card::new("The Magician", Suit::Major, 1);
        let ace = Card::new("Ace of Cups", Suit::Cups, 1);
        assert!(!magician.is_ace());
        assert!(ace.is_ace());
    }
}
