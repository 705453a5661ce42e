//! Readings: the cards drawn for one spread, plus question and persona.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::deck::card_by_name;
use crate::domain::{Card, PersonaStyle, SpreadDefinition};
use crate::errors::domain::{DomainError, ValidationKind};

/// Question used when the querent leaves it blank.
pub const DEFAULT_QUESTION: &str = "General Guidance";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn from_reversed(is_reversed: bool) -> Self {
        if is_reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }

    /// Marker used in prompts.
    pub fn marker(self) -> &'static str {
        match self {
            Orientation::Upright => "UPRIGHT",
            Orientation::Reversed => "REVERSED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub card: Card,
    /// 0-based index into the spread.
    pub position: usize,
    pub position_label: String,
    pub is_reversed: bool,
}

impl DrawnCard {
    pub fn orientation(&self) -> Orientation {
        Orientation::from_reversed(self.is_reversed)
    }
}

/// A card as a client submits it for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedCard {
    pub name: String,
    pub is_reversed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    spread: SpreadDefinition,
    question: String,
    persona: PersonaStyle,
    cards: Vec<DrawnCard>,
}

impl Reading {
    /// An empty reading for `spread`. A blank question becomes [`DEFAULT_QUESTION`].
    pub fn new(spread: SpreadDefinition, question: &str, persona: PersonaStyle) -> Self {
        let question = question.trim();
        let question = if question.is_empty() {
            DEFAULT_QUESTION.to_string()
        } else {
            question.to_string()
        };
        Self {
            spread,
            question,
            persona,
            cards: Vec::new(),
        }
    }

    /// Rebuild a complete reading from client-drawn cards.
    ///
    /// Card names must come from the deck, appear at most once, and fill the
    /// spread exactly. Positions are assigned in submission order.
    pub fn from_submitted(
        spread: SpreadDefinition,
        question: &str,
        persona: PersonaStyle,
        submitted: &[SubmittedCard],
    ) -> Result<Self, DomainError> {
        if submitted.len() != spread.required_count {
            return Err(DomainError::validation(
                ValidationKind::CardCount,
                format!(
                    "Spread {} needs exactly {} cards, got {}",
                    spread.id,
                    spread.required_count,
                    submitted.len()
                ),
            ));
        }

        let mut reading = Self::new(spread, question, persona);
        let mut seen = HashSet::new();
        for (position, entry) in submitted.iter().enumerate() {
            let card = card_by_name(&entry.name).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownCard,
                    format!("Unknown card: {}", entry.name),
                )
            })?;
            if !seen.insert(card.name()) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateCard,
                    format!("{} appears more than once", card.name()),
                ));
            }
            let position_label = reading.spread.position_label(position);
            reading.push(DrawnCard {
                card: card.clone(),
                position,
                position_label,
                is_reversed: entry.is_reversed,
            });
        }
        Ok(reading)
    }

    pub fn spread(&self) -> &SpreadDefinition {
        &self.spread
    }

    pub fn spread_id(&self) -> &str {
        &self.spread.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn persona(&self) -> PersonaStyle {
        self.persona
    }

    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    pub fn required_count(&self) -> usize {
        self.spread.required_count
    }

    pub fn remaining(&self) -> usize {
        self.required_count().saturating_sub(self.cards.len())
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == self.required_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.card.name() == name)
    }

    /// Callers (the draw engine and `from_submitted`) enforce count and uniqueness.
    pub(crate) fn push(&mut self, card: DrawnCard) {
        debug_assert!(!self.is_complete(), "push into a complete reading");
        debug_assert!(!self.contains(card.card.name()), "duplicate card in reading");
        self.cards.push(card);
    }
}
