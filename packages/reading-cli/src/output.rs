//! Text and JSON rendering for readings and the catalog.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::json;
use tarot_backend::domain::{DeckVariant, InterpretationRequest, PersonaStyle, Reading};
use tarot_backend::services::readings::ReadingView;
use tarot_backend::services::ReadingContext;

#[derive(Debug, Serialize)]
pub struct ReadingReport {
    pub deck: DeckVariant,
    pub reading: ReadingView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<InterpretationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation_error: Option<String>,
}

impl ReadingReport {
    pub fn new(
        ctx: &ReadingContext,
        reading: &Reading,
        deck: DeckVariant,
        prompt: Option<InterpretationRequest>,
        interpretation: Option<Result<String, String>>,
    ) -> Self {
        let (interpretation, interpretation_error) = match interpretation {
            Some(Ok(text)) => (Some(text), None),
            Some(Err(message)) => (None, Some(message)),
            None => (None, None),
        };
        Self {
            deck,
            reading: ReadingView::new(reading, ctx),
            prompt,
            interpretation,
            interpretation_error,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Renderer {
    Text,
    Json,
}

impl Renderer {
    pub fn reading(self, report: &ReadingReport) -> Result<String, serde_json::Error> {
        match self {
            Renderer::Json => serde_json::to_string_pretty(report),
            Renderer::Text => Ok(reading_text(report)),
        }
    }

    pub fn catalog(self, ctx: &ReadingContext) -> Result<String, serde_json::Error> {
        match self {
            Renderer::Json => serde_json::to_string_pretty(&json!({
                "spreads": ctx.catalog().spreads(),
                "personas": PersonaStyle::ALL,
                "decks": DeckVariant::ALL,
            })),
            Renderer::Text => Ok(catalog_text(ctx)),
        }
    }
}

fn reading_text(report: &ReadingReport) -> String {
    let reading = &report.reading;
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{} ({} deck)", reading.spread_title, report.deck);
    let _ = writeln!(out, "Question: {}", reading.question);
    let _ = writeln!(out);
    for card in &reading.cards {
        let marker = if card.is_reversed { " (reversed)" } else { "" };
        let _ = writeln!(out, "  {:>2}. {}: {}{}", card.position + 1, card.position_label, card.name, marker);
    }

    if let Some(prompt) = &report.prompt {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- prompt ---");
        let _ = writeln!(out, "{}", prompt.combined());
    }
    if let Some(text) = &report.interpretation {
        let _ = writeln!(out);
        let _ = writeln!(out, "{text}");
    }
    if let Some(message) = &report.interpretation_error {
        let _ = writeln!(out);
        let _ = writeln!(out, "{message}");
    }
    out.trim_end().to_string()
}

fn catalog_text(ctx: &ReadingContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Spreads:");
    for spread in ctx.catalog().spreads() {
        let _ = writeln!(out, "  {:<18} {} ({} cards)", spread.id, spread.title, spread.required_count);
    }
    let _ = writeln!(out, "Personas:");
    for persona in PersonaStyle::ALL {
        let _ = writeln!(out, "  {}", persona);
    }
    let _ = writeln!(out, "Decks:");
    for deck in DeckVariant::ALL {
        let _ = writeln!(out, "  {:<18} {} cards", deck.as_str(), deck.size());
    }
    out.trim_end().to_string()
}
