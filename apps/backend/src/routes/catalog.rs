//! Read-only catalog endpoints: spreads, personas and deck variants.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::{DeckVariant, PersonaStyle};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/spreads
async fn list_spreads(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.readings.catalog().spreads()))
}

#[derive(Debug, Serialize)]
struct PersonaEntry {
    id: PersonaStyle,
    name: &'static str,
}

/// GET /api/personas
async fn list_personas() -> Result<HttpResponse, AppError> {
    let personas: Vec<PersonaEntry> = PersonaStyle::ALL
        .into_iter()
        .map(|p| PersonaEntry {
            id: p,
            name: p.display_name(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(personas))
}

#[derive(Debug, Serialize)]
struct DeckEntry {
    id: DeckVariant,
    size: usize,
    default: bool,
}

/// GET /api/decks
async fn list_decks(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let default = app_state.readings.default_deck();
    let decks: Vec<DeckEntry> = DeckVariant::ALL
        .into_iter()
        .map(|d| DeckEntry {
            id: d,
            size: d.size(),
            default: d == default,
        })
        .collect();
    Ok(HttpResponse::Ok().json(decks))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/spreads", web::get().to(list_spreads))
        .route("/personas", web::get().to(list_personas))
        .route("/decks", web::get().to(list_decks));
}
