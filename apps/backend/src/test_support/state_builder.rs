use std::sync::Arc;
use std::time::Duration;

use super::interpreter::StaticInterpreter;
use crate::config::{ConfigError, ReadingConfig};
use crate::infra::state::build_state;
use crate::state::AppState;

/// Test AppState: no network, no re-entrancy window, fake interpreter.
pub struct TestStateBuilder {
    reading_config: ReadingConfig,
    interpreter: Arc<StaticInterpreter>,
    session_idle: Duration,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            reading_config: ReadingConfig {
                reentry_window_ms: 0,
                ..ReadingConfig::default()
            },
            interpreter: Arc::new(StaticInterpreter::default()),
            session_idle: Duration::from_secs(60),
        }
    }

    pub fn with_reading_config(mut self, config: ReadingConfig) -> Self {
        self.reading_config = config;
        self
    }

    /// Keep your own `Arc` to inspect calls afterwards.
    pub fn with_interpreter(mut self, interpreter: Arc<StaticInterpreter>) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn with_session_idle(mut self, idle: Duration) -> Self {
        self.session_idle = idle;
        self
    }

    pub fn build(self) -> Result<AppState, ConfigError> {
        build_state()
            .with_reading_config(self.reading_config)
            .with_interpreter(self.interpreter)
            .with_session_idle(self.session_idle)
            .build()
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new test state builder
///
/// # Example
/// ```rust,no_run
/// use tarot_backend::test_support::create_test_state;
///
/// let state = create_test_state().build().unwrap();
/// ```
pub fn create_test_state() -> TestStateBuilder {
    TestStateBuilder::new()
}
