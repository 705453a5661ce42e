use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::InterpretationRequest;

/// What users see whenever interpretation fails, whatever the cause.
pub const USER_MESSAGE: &str = "The Oracle is currently silent. Please try again.";

/// Sampling parameters passed through to the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretationError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("interpretation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    InvalidResponse(String),
    #[error("interpretation service returned no text")]
    Empty,
}

/// Anything that can generate interpretation text.
///
/// Implementations must not retry internally; callers decide whether a
/// failed attempt is retried.
#[async_trait]
pub trait InterpretationClient: Send + Sync {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
        params: GenerationParams,
    ) -> Result<String, InterpretationError>;

    /// Short label for logs.
    fn name(&self) -> &str {
        "interpreter"
    }
}
