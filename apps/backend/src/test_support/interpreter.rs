use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::InterpretationRequest;
use crate::interpretation::{GenerationParams, InterpretationClient, InterpretationError};

pub const DEFAULT_REPLY: &str = "The cards have spoken.";

/// Fake backend with a fixed answer, an optional delay and a call counter.
pub struct StaticInterpreter {
    reply: Result<String, InterpretationError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<InterpretationRequest>>,
}

impl StaticInterpreter {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_result(Ok(text.into()))
    }

    pub fn failing(err: InterpretationError) -> Self {
        Self::with_result(Err(err))
    }

    /// Simulates an unreachable service.
    pub fn unreachable() -> Self {
        Self::failing(InterpretationError::Transport("connection refused".to_string()))
    }

    fn with_result(reply: Result<String, InterpretationError>) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<InterpretationRequest> {
        self.last_request.lock().clone()
    }
}

impl Default for StaticInterpreter {
    fn default() -> Self {
        Self::replying(DEFAULT_REPLY)
    }
}

#[async_trait]
impl InterpretationClient for StaticInterpreter {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
        _params: GenerationParams,
    ) -> Result<String, InterpretationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }

    fn name(&self) -> &str {
        "static"
    }
}
