//! Stateless reading endpoints.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{DeckVariant, PersonaStyle, SubmittedCard};
use crate::error::AppError;
use crate::interpretation::USER_MESSAGE;
use crate::services::readings::{
    draw_complete_reading, interpret_reading, reading_from_submission, ReadingView,
};
use crate::services::sessions::InterpretationStatus;
use crate::services::ReadingContext;
use crate::state::app_state::AppState;

/// Persona and deck arrive as strings so unknown values map to their own
/// error codes instead of a generic body error.
pub(crate) fn parse_persona(raw: Option<&str>) -> Result<PersonaStyle, AppError> {
    match raw {
        None => Ok(PersonaStyle::default()),
        Some(raw) => Ok(raw.parse::<PersonaStyle>()?),
    }
}

pub(crate) fn parse_deck(raw: Option<&str>, ctx: &ReadingContext) -> Result<DeckVariant, AppError> {
    match raw {
        None => Ok(ctx.default_deck()),
        Some(raw) => Ok(raw.parse::<DeckVariant>()?),
    }
}

#[derive(Debug, Deserialize)]
pub struct DrawReadingRequest {
    pub spread: String,
    #[serde(default)]
    pub question: String,
    pub persona: Option<String>,
    pub deck: Option<String>,
    pub seed: Option<u64>,
    /// Also ask the interpretation service.
    #[serde(default)]
    pub interpret: bool,
}

#[derive(Debug, Serialize)]
struct DrawReadingResponse {
    reading: ReadingView,
    interpretation: InterpretationStatus,
}

/// POST /api/readings
///
/// Draws a complete reading. With `interpret: true` the text is included;
/// a failed interpretation still returns the drawn cards.
async fn draw_reading(
    app_state: web::Data<AppState>,
    body: web::Json<DrawReadingRequest>,
) -> Result<HttpResponse, AppError> {
    let ctx = app_state.readings.as_ref();
    let persona = parse_persona(body.persona.as_deref())?;
    let deck = parse_deck(body.deck.as_deref(), ctx)?;
    let reading = draw_complete_reading(ctx, &body.spread, deck, &body.question, persona, body.seed)?;

    let interpretation = if body.interpret {
        match interpret_reading(ctx, app_state.interpreter.as_ref(), &reading).await {
            Ok(text) => InterpretationStatus::Ready { text },
            Err(err) => {
                warn!(error = %err, "one-shot interpretation failed");
                InterpretationStatus::Failed {
                    message: USER_MESSAGE.to_string(),
                }
            }
        }
    } else {
        InterpretationStatus::Idle
    };

    Ok(HttpResponse::Ok().json(DrawReadingResponse {
        reading: ReadingView::new(&reading, ctx),
        interpretation,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SubmittedCardBody {
    pub name: String,
    #[serde(default, alias = "isReversed")]
    pub is_reversed: bool,
}

#[derive(Debug, Deserialize)]
pub struct InterpretRequest {
    pub spread: String,
    #[serde(default)]
    pub question: String,
    pub persona: Option<String>,
    pub cards: Vec<SubmittedCardBody>,
}

#[derive(Debug, Serialize)]
struct InterpretResponse {
    interpretation: String,
    reading: ReadingView,
}

/// POST /api/interpret
///
/// Interprets a reading the client drew itself.
async fn interpret(
    app_state: web::Data<AppState>,
    body: web::Json<InterpretRequest>,
) -> Result<HttpResponse, AppError> {
    let ctx = app_state.readings.as_ref();
    let body = body.into_inner();
    let persona = parse_persona(body.persona.as_deref())?;
    let cards: Vec<SubmittedCard> = body
        .cards
        .into_iter()
        .map(|c| SubmittedCard {
            name: c.name,
            is_reversed: c.is_reversed,
        })
        .collect();

    let reading = reading_from_submission(ctx, &body.spread, &body.question, persona, &cards)?;
    let text = interpret_reading(ctx, app_state.interpreter.as_ref(), &reading).await?;

    Ok(HttpResponse::Ok().json(InterpretResponse {
        interpretation: text,
        reading: ReadingView::new(&reading, ctx),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/readings", web::post().to(draw_reading))
        .route("/interpret", web::post().to(interpret));
}
