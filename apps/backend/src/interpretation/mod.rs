//! Interpretation port: turns an [`InterpretationRequest`] into prose.
//!
//! [`InterpretationRequest`]: crate::domain::InterpretationRequest

pub mod chat_completions;
pub mod trait_def;

pub use chat_completions::ChatCompletionsClient;
pub use trait_def::{GenerationParams, InterpretationClient, InterpretationError, USER_MESSAGE};
