//! Interactive sessions: start, draw one card at a time, reset, interpret.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::readings::{parse_deck, parse_persona};
use crate::error::AppError;
use crate::extractors::CurrentSession;
use crate::services::sessions::SessionView;
use crate::services::ReadingSession;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub spread: String,
    #[serde(default)]
    pub question: String,
    pub persona: Option<String>,
    pub deck: Option<String>,
    pub seed: Option<u64>,
}

/// POST /api/sessions
async fn create_session(
    app_state: web::Data<AppState>,
    body: web::Json<StartSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let ctx = app_state.readings.as_ref();
    let persona = parse_persona(body.persona.as_deref())?;
    let deck = parse_deck(body.deck.as_deref(), ctx)?;

    let session = ReadingSession::new(ctx.new_engine(body.seed));
    let view = session.start(&body.spread, deck, &body.question, persona, ctx)?;
    app_state.sessions.insert(session).await;

    Ok(HttpResponse::Created().json(view))
}

/// GET /api/sessions/{session_id}
async fn get_session(
    app_state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(session.view(&app_state.readings)))
}

/// POST /api/sessions/{session_id}/draw
async fn draw(
    app_state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(session.draw(&app_state.readings)?))
}

/// POST /api/sessions/{session_id}/reset
async fn reset(
    app_state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(session.reset(&app_state.readings)?))
}

#[derive(Debug, Serialize)]
struct SessionInterpretation {
    interpretation: String,
    session: SessionView,
}

/// POST /api/sessions/{session_id}/interpret
///
/// On failure the session keeps its reading and records a retryable
/// `failed` status.
async fn interpret(
    app_state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let ctx = app_state.readings.as_ref();
    let text = session
        .interpret(ctx, app_state.interpreter.as_ref())
        .await?;
    Ok(HttpResponse::Ok().json(SessionInterpretation {
        interpretation: text,
        session: session.view(ctx),
    }))
}

/// DELETE /api/sessions/{session_id}
async fn delete_session(
    app_state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    app_state.sessions.remove(session.id()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_session))
        .route("/{session_id}", web::get().to(get_session))
        .route("/{session_id}", web::delete().to(delete_session))
        .route("/{session_id}/draw", web::post().to(draw))
        .route("/{session_id}/reset", web::post().to(reset))
        .route("/{session_id}/interpret", web::post().to(interpret));
}
