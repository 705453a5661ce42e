//! One-shot readings and the serializable views shared with sessions.

use serde::Serialize;
use tracing::{debug, info};

use super::context::ReadingContext;
use crate::domain::{
    CardArt, DeckVariant, DrawError, DrawnCard, InterpretationRequest, Orientation, PersonaStyle,
    Reading, SubmittedCard,
};
use crate::errors::domain::DomainError;
use crate::interpretation::{InterpretationClient, InterpretationError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub position: usize,
    pub position_label: String,
    pub name: String,
    pub is_reversed: bool,
    pub orientation: Orientation,
    pub art: CardArt,
}

impl CardView {
    pub fn new(card: &DrawnCard, persona: PersonaStyle, ctx: &ReadingContext) -> Self {
        Self {
            position: card.position,
            position_label: card.position_label.clone(),
            name: card.card.name().to_string(),
            is_reversed: card.is_reversed,
            orientation: card.orientation(),
            art: ctx
                .assets()
                .resolve_card_art(card.card.name(), persona.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingView {
    pub spread: String,
    pub spread_title: String,
    pub question: String,
    pub persona: PersonaStyle,
    pub required_count: usize,
    pub remaining: usize,
    pub complete: bool,
    pub cards: Vec<CardView>,
}

impl ReadingView {
    pub fn new(reading: &Reading, ctx: &ReadingContext) -> Self {
        Self {
            spread: reading.spread_id().to_string(),
            spread_title: reading.spread().title.clone(),
            question: reading.question().to_string(),
            persona: reading.persona(),
            required_count: reading.required_count(),
            remaining: reading.remaining(),
            complete: reading.is_complete(),
            cards: reading
                .cards()
                .iter()
                .map(|card| CardView::new(card, reading.persona(), ctx))
                .collect(),
        }
    }
}

/// Draw a whole spread in one go.
pub fn draw_complete_reading(
    ctx: &ReadingContext,
    spread: &str,
    deck: DeckVariant,
    question: &str,
    persona: PersonaStyle,
    seed: Option<u64>,
) -> Result<Reading, DrawError> {
    let mut engine = ctx.new_engine(seed);
    engine.start(spread, deck, question, persona)?;
    let reading = engine.draw_all()?.clone();
    info!(spread = %reading.spread_id(), deck = %deck, seeded = seed.is_some(), "one-shot reading drawn");
    Ok(reading)
}

/// Validate a reading the client drew itself.
pub fn reading_from_submission(
    ctx: &ReadingContext,
    spread: &str,
    question: &str,
    persona: PersonaStyle,
    cards: &[SubmittedCard],
) -> Result<Reading, DomainError> {
    let spread = ctx.catalog().spread_definition(spread)?.clone();
    Reading::from_submitted(spread, question, persona, cards)
}

pub fn build_request(ctx: &ReadingContext, reading: &Reading) -> InterpretationRequest {
    ctx.prompts().build_request(reading, reading.persona())
}

/// Interpret a complete reading. The reading itself is never touched.
pub async fn interpret_reading(
    ctx: &ReadingContext,
    client: &dyn InterpretationClient,
    reading: &Reading,
) -> Result<String, InterpretationError> {
    let request = build_request(ctx, reading);
    debug!(client = client.name(), spread = %reading.spread_id(), "interpreting reading");
    client.interpret(&request, ctx.generation()).await
}
