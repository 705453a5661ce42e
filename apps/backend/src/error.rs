//! HTTP boundary error: every failure leaves the service as RFC 7807
//! `application/problem+json` with a stable [`ErrorCode`].

use actix_web::error::{JsonPayloadError, PathError, ResponseError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::config::ConfigError;
use crate::domain::{CatalogError, DrawError};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::interpretation::{InterpretationError, USER_MESSAGE};
use crate::services::sessions::SessionError;
use crate::trace_ctx;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation {
        code: ErrorCode,
        detail: String,
        status: StatusCode,
    },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Service unavailable: {detail}")]
    Unavailable { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::BadRequest { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Unavailable { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Client-visible detail. Server-side failures never echo their cause.
    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Unavailable { detail, .. } => detail.clone(),
            AppError::Config { .. } | AppError::Internal { .. } => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// The Oracle is silent; the cause stays in the logs.
    pub fn interpretation_unavailable() -> Self {
        Self::Unavailable {
            code: ErrorCode::InterpretationUnavailable,
            detail: USER_MESSAGE.to_string(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let lower = word.to_ascii_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::UnknownSpread => ErrorCode::UnknownSpread,
                    ValidationKind::UnknownCard => ErrorCode::UnknownCard,
                    ValidationKind::DuplicateCard => ErrorCode::DuplicateCard,
                    ValidationKind::CardCount => ErrorCode::InvalidCardCount,
                    ValidationKind::UnknownPersona => ErrorCode::UnknownPersona,
                    ValidationKind::UnknownDeck => ErrorCode::UnknownDeck,
                    ValidationKind::DeckTooSmall => ErrorCode::DeckTooSmall,
                    ValidationKind::InvalidSessionId => {
                        return AppError::bad_request(ErrorCode::InvalidSessionId, detail)
                    }
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::DrawInProgress => ErrorCode::DrawInProgress,
                    ConflictKind::InterpretationPending => ErrorCode::InterpretationPending,
                    ConflictKind::ReadingIncomplete => ErrorCode::ReadingIncomplete,
                    ConflictKind::NotStarted => ErrorCode::NotStarted,
                    ConflictKind::ReadingChanged => ErrorCode::ReadingChanged,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Session => ErrorCode::SessionNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::Configuration => AppError::config(detail),
                InfraErrorKind::Interpretation => {
                    warn!(detail = %detail, "interpretation failed");
                    AppError::interpretation_unavailable()
                }
                InfraErrorKind::Other(_) => AppError::internal(detail),
            },
        }
    }
}

impl From<DrawError> for AppError {
    fn from(err: DrawError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<InterpretationError> for AppError {
    fn from(err: InterpretationError) -> Self {
        warn!(error = %err, "interpretation service failed");
        AppError::interpretation_unavailable()
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(code = %code, error = %self, trace_id = %trace_id, "request failed");
        }

        let problem_details = ProblemDetails {
            type_: format!("https://tarot.local/errors/{}", code.as_str().to_ascii_lowercase()),
            title: Self::humanize_code(code.as_str()),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.as_str().to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}

/// Malformed JSON bodies become `BAD_REQUEST` problems.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid request body: {err}")).into()
}

/// Unparseable path segments become `BAD_REQUEST` problems.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid path: {err}")).into()
}
