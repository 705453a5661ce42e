//! Interactive draw engine: one card per trigger, without replacement.
//!
//! The engine owns a shuffled working copy of the chosen deck and pops from
//! its end. States run `Empty -> Drawing -> Complete`; once complete, further
//! draws are reported as [`DrawOutcome::AlreadyComplete`] and change nothing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::shuffle::{shuffled, RandomSource};
use crate::domain::{Card, DeckVariant, DrawnCard, PersonaStyle, Reading, SpreadCatalog};

/// Default probability of a card coming out reversed.
pub const DEFAULT_REVERSAL_PROBABILITY: f64 = 0.4;

/// Default window during which a repeated draw trigger is ignored.
pub const DEFAULT_REENTRY_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawState {
    Empty,
    Drawing,
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawSettings {
    pub reversal_probability: f64,
    /// Zero disables the re-entrancy window.
    pub reentry_window: Duration,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
            reentry_window: DEFAULT_REENTRY_WINDOW,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn and appended to the reading.
    Drawn(DrawnCard),
    /// The reading was already complete; nothing changed.
    AlreadyComplete,
    /// A repeated trigger arrived inside the re-entrancy window; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("unknown spread: {0}")]
    UnknownSpread(String),
    #[error("deck exhausted: spread needs {required} cards but only {available} are available")]
    DeckExhausted { required: usize, available: usize },
    #[error("no spread has been started")]
    NotStarted,
}

struct ActiveDraw {
    reading: Reading,
    deck: DeckVariant,
    working: Vec<Card>,
}

pub struct DrawEngine {
    catalog: Arc<SpreadCatalog>,
    settings: DrawSettings,
    source: Box<dyn RandomSource>,
    active: Option<ActiveDraw>,
    last_draw_at: Option<Instant>,
}

impl DrawEngine {
    pub fn new(
        catalog: Arc<SpreadCatalog>,
        settings: DrawSettings,
        source: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            catalog,
            settings,
            source,
            active: None,
            last_draw_at: None,
        }
    }

    /// Begin a fresh reading for `spread_id`, discarding any previous one.
    ///
    /// On failure nothing is materialized: the engine is left without an
    /// active reading and the caller must start again with a valid spread.
    pub fn start(
        &mut self,
        spread_id: &str,
        deck: DeckVariant,
        question: &str,
        persona: PersonaStyle,
    ) -> Result<DrawState, DrawError> {
        self.active = None;
        self.last_draw_at = None;

        let spread = self
            .catalog
            .spread_definition(spread_id)
            .map_err(|_| DrawError::UnknownSpread(spread_id.to_string()))?
            .clone();

        let cards = deck.cards();
        if cards.len() < spread.required_count {
            return Err(DrawError::DeckExhausted {
                required: spread.required_count,
                available: cards.len(),
            });
        }

        let working = shuffled(&cards, self.source.as_mut());
        debug!(spread = %spread.id, deck = %deck, cards = working.len(), "draw started");
        self.active = Some(ActiveDraw {
            reading: Reading::new(spread, question, persona),
            deck,
            working,
        });
        Ok(DrawState::Empty)
    }

    /// Draw the next card, honoring the re-entrancy window.
    pub fn draw_one(&mut self) -> Result<DrawOutcome, DrawError> {
        self.draw_one_at(Instant::now())
    }

    /// [`draw_one`](Self::draw_one) with an explicit trigger time.
    pub fn draw_one_at(&mut self, now: Instant) -> Result<DrawOutcome, DrawError> {
        let active = self.active.as_ref().ok_or(DrawError::NotStarted)?;
        if active.reading.is_complete() {
            return Ok(DrawOutcome::AlreadyComplete);
        }
        if let Some(last) = self.last_draw_at {
            if now.saturating_duration_since(last) < self.settings.reentry_window {
                debug!("draw trigger ignored inside re-entrancy window");
                return Ok(DrawOutcome::Ignored);
            }
        }

        let drawn = self.pop_next()?;
        self.last_draw_at = Some(now);
        Ok(DrawOutcome::Drawn(drawn))
    }

    /// Draw until the reading is complete, ignoring the re-entrancy window.
    pub fn draw_all(&mut self) -> Result<&Reading, DrawError> {
        while self.state() != DrawState::Complete {
            if self.active.is_none() {
                return Err(DrawError::NotStarted);
            }
            self.pop_next()?;
        }
        self.reading().ok_or(DrawError::NotStarted)
    }

    /// Back to `Empty` for the same spread, question and persona, with a
    /// freshly shuffled working deck.
    pub fn reset(&mut self) -> Result<DrawState, DrawError> {
        let active = self.active.take().ok_or(DrawError::NotStarted)?;
        let reading = active.reading;
        let (spread, question, persona) = (
            reading.spread().id.clone(),
            reading.question().to_string(),
            reading.persona(),
        );
        self.start(&spread, active.deck, &question, persona)
    }

    pub fn state(&self) -> DrawState {
        match &self.active {
            None => DrawState::Empty,
            Some(active) if active.reading.is_complete() => DrawState::Complete,
            Some(active) if active.reading.cards().is_empty() => DrawState::Empty,
            Some(_) => DrawState::Drawing,
        }
    }

    pub fn reading(&self) -> Option<&Reading> {
        self.active.as_ref().map(|a| &a.reading)
    }

    pub fn deck(&self) -> Option<DeckVariant> {
        self.active.as_ref().map(|a| a.deck)
    }

    /// Cards still needed to complete the reading (0 when nothing is started).
    pub fn remaining(&self) -> usize {
        self.reading().map(Reading::remaining).unwrap_or(0)
    }

    /// Size of the shuffled working deck, `None` when nothing is started.
    pub fn working_deck_len(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.working.len())
    }

    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    fn pop_next(&mut self) -> Result<DrawnCard, DrawError> {
        let active = self.active.as_mut().ok_or(DrawError::NotStarted)?;
        let position = active.reading.cards().len();
        let card = active.working.pop().ok_or(DrawError::DeckExhausted {
            required: active.reading.required_count(),
            available: position,
        })?;
        let is_reversed = self.source.chance(self.settings.reversal_probability);
        let drawn = DrawnCard {
            position_label: active.reading.spread().position_label(position),
            card,
            position,
            is_reversed,
        };
        active.reading.push(drawn.clone());
        debug!(
            position,
            card = %drawn.card,
            reversed = is_reversed,
            remaining = active.reading.remaining(),
            "card drawn"
        );
        Ok(drawn)
    }
}
