//! Error codes for the tarot reading API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and appears verbatim in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General bad request error
    BadRequest,
    /// General validation error
    ValidationError,
    /// Spread id not in the catalog
    UnknownSpread,
    /// Card name not in the deck
    UnknownCard,
    /// Same card submitted twice
    DuplicateCard,
    /// Submitted card count does not match the spread
    InvalidCardCount,
    UnknownPersona,
    UnknownDeck,
    /// Session id is not a UUID
    InvalidSessionId,
    /// Deck variant smaller than the spread
    DeckTooSmall,

    // Resource Not Found
    SessionNotFound,
    /// General not found error
    NotFound,

    // Session State Conflicts
    /// Another draw holds the session
    DrawInProgress,
    /// An interpretation is already in flight
    InterpretationPending,
    /// Interpretation needs a complete reading
    ReadingIncomplete,
    /// No spread has been started
    NotStarted,
    /// Reset or restarted while an interpretation was in flight
    ReadingChanged,
    /// General conflict
    Conflict,

    // System Errors
    /// The interpretation service failed
    InterpretationUnavailable,
    ConfigError,
    Internal,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::UnknownSpread => "UNKNOWN_SPREAD",
            Self::UnknownCard => "UNKNOWN_CARD",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::InvalidCardCount => "INVALID_CARD_COUNT",
            Self::UnknownPersona => "UNKNOWN_PERSONA",
            Self::UnknownDeck => "UNKNOWN_DECK",
            Self::InvalidSessionId => "INVALID_SESSION_ID",
            Self::DeckTooSmall => "DECK_TOO_SMALL",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DrawInProgress => "DRAW_IN_PROGRESS",
            Self::InterpretationPending => "INTERPRETATION_PENDING",
            Self::ReadingIncomplete => "READING_INCOMPLETE",
            Self::NotStarted => "NOT_STARTED",
            Self::ReadingChanged => "READING_CHANGED",
            Self::Conflict => "CONFLICT",

            Self::InterpretationUnavailable => "INTERPRETATION_UNAVAILABLE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }

    pub const ALL: [ErrorCode; 21] = [
        Self::BadRequest,
        Self::ValidationError,
        Self::UnknownSpread,
        Self::UnknownCard,
        Self::DuplicateCard,
        Self::InvalidCardCount,
        Self::UnknownPersona,
        Self::UnknownDeck,
        Self::InvalidSessionId,
        Self::DeckTooSmall,
        Self::SessionNotFound,
        Self::NotFound,
        Self::DrawInProgress,
        Self::InterpretationPending,
        Self::ReadingIncomplete,
        Self::NotStarted,
        Self::ReadingChanged,
        Self::Conflict,
        Self::InterpretationUnavailable,
        Self::ConfigError,
        Self::Internal,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::UnknownSpread.as_str(), "UNKNOWN_SPREAD");
        assert_eq!(ErrorCode::InvalidCardCount.as_str(), "INVALID_CARD_COUNT");
        assert_eq!(ErrorCode::SessionNotFound.as_str(), "SESSION_NOT_FOUND");
        assert_eq!(
            ErrorCode::InterpretationUnavailable.as_str(),
            "INTERPRETATION_UNAVAILABLE"
        );
        assert_eq!(ErrorCode::DrawInProgress.as_str(), "DRAW_IN_PROGRESS");
    }

    #[test]
    fn codes_are_unique_screaming_snake_case() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate code {s}");
            assert!(s
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::UnknownCard), "UNKNOWN_CARD");
        assert_eq!(format!("{}", ErrorCode::NotStarted), "NOT_STARTED");
    }
}
