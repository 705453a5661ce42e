//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failures on caller-supplied input
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    UnknownSpread,
    UnknownCard,
    DuplicateCard,
    CardCount,
    UnknownPersona,
    UnknownDeck,
    InvalidSessionId,
    /// The chosen deck variant holds fewer cards than the spread needs
    DeckTooSmall,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// Spread/deck configuration that can never be satisfied
    Configuration,
    /// The interpretation service failed or answered badly
    Interpretation,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    DrawInProgress,
    InterpretationPending,
    ReadingIncomplete,
    NotStarted,
    /// The reading changed while its interpretation was in flight
    ReadingChanged,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict with the current session state
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<crate::domain::DrawError> for DomainError {
    fn from(err: crate::domain::DrawError) -> Self {
        use crate::domain::DrawError;
        let detail = err.to_string();
        match err {
            DrawError::UnknownSpread(_) => Self::validation(ValidationKind::UnknownSpread, detail),
            DrawError::DeckExhausted { .. } => Self::validation(ValidationKind::DeckTooSmall, detail),
            DrawError::NotStarted => Self::conflict(ConflictKind::NotStarted, detail),
        }
    }
}

impl From<crate::domain::CatalogError> for DomainError {
    fn from(err: crate::domain::CatalogError) -> Self {
        use crate::domain::CatalogError;
        let detail = err.to_string();
        match err {
            CatalogError::UnknownSpread(_) => Self::validation(ValidationKind::UnknownSpread, detail),
            CatalogError::DuplicateSpread(_)
            | CatalogError::EmptySpread(_)
            | CatalogError::TooManyLabels { .. } => {
                Self::infra(InfraErrorKind::Configuration, detail)
            }
        }
    }
}
