use std::sync::Arc;

use crate::interpretation::InterpretationClient;
use crate::services::{ReadingContext, SessionStore};

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    /// Catalog, prompts and draw settings built from configuration
    pub readings: Arc<ReadingContext>,
    /// Whatever backend generates interpretation text
    pub interpreter: Arc<dyn InterpretationClient>,
    /// Live interactive sessions
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        readings: ReadingContext,
        interpreter: Arc<dyn InterpretationClient>,
        sessions: SessionStore,
    ) -> Self {
        Self {
            readings: Arc::new(readings),
            interpreter,
            sessions,
        }
    }
}
