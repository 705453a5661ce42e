// Unit tests for error mapping: domain failures to HTTP status and code.
use crate::domain::{CatalogError, DrawError};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::interpretation::InterpretationError;
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::DuplicateCard, "twice");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::DuplicateCard);
    assert_eq!(app.status().as_u16(), 422);

    let other = DomainError::validation(ValidationKind::Other("x".into()), "bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn malformed_session_id_is_400() {
    let de = DomainError::validation(ValidationKind::InvalidSessionId, "nope");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidSessionId);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts_to_409() {
    let app: AppError = DomainError::conflict(ConflictKind::InterpretationPending, "busy").into();
    assert_eq!(app.code().as_str(), "INTERPRETATION_PENDING");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::conflict(ConflictKind::Other("x".into()), "generic").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Session, "gone").into();
    assert_eq!(app.code(), ErrorCode::SessionNotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_draw_errors() {
    let app: AppError = DrawError::UnknownSpread("ten-card-nonsense".into()).into();
    assert_eq!(app.code(), ErrorCode::UnknownSpread);
    assert_eq!(app.status().as_u16(), 422);

    let app: AppError = DrawError::DeckExhausted {
        required: 23,
        available: 22,
    }
    .into();
    assert_eq!(app.code(), ErrorCode::DeckTooSmall);

    let app: AppError = DrawError::NotStarted.into();
    assert_eq!(app.code(), ErrorCode::NotStarted);
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn malformed_catalog_is_a_config_error() {
    let app: AppError = CatalogError::EmptySpread("zero".into()).into();
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn interpretation_failures_hide_the_cause() {
    for err in [
        InterpretationError::Transport("connection refused".into()),
        InterpretationError::Status {
            status: 429,
            body: "rate limited".into(),
        },
        InterpretationError::Empty,
    ] {
        let app: AppError = err.into();
        assert_eq!(app.code(), ErrorCode::InterpretationUnavailable);
        assert_eq!(app.status().as_u16(), 503);
        assert!(!app.to_string().contains("refused"));
    }

    let app: AppError = DomainError::infra(InfraErrorKind::Interpretation, "timeout").into();
    assert_eq!(app.code(), ErrorCode::InterpretationUnavailable);
}
