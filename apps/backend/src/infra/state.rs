use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::{
    session_idle_from_env, ConfigError, InterpreterSettings, ReadingConfig,
    DEFAULT_SESSION_IDLE_SECS,
};
use crate::interpretation::{ChatCompletionsClient, InterpretationClient};
use crate::services::{ReadingContext, SessionStore};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    reading_config: ReadingConfig,
    interpreter: Option<Arc<dyn InterpretationClient>>,
    interpreter_settings: InterpreterSettings,
    session_idle: Duration,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            reading_config: ReadingConfig::default(),
            interpreter: None,
            interpreter_settings: InterpreterSettings::default(),
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }

    /// Read every setting from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new()
            .with_reading_config(ReadingConfig::from_env()?)
            .with_interpreter_settings(InterpreterSettings::from_env()?)
            .with_session_idle(session_idle_from_env()?))
    }

    pub fn with_reading_config(mut self, config: ReadingConfig) -> Self {
        self.reading_config = config;
        self
    }

    pub fn with_interpreter_settings(mut self, settings: InterpreterSettings) -> Self {
        self.interpreter_settings = settings;
        self
    }

    /// Use a ready-made client instead of one built from settings.
    pub fn with_interpreter(mut self, client: Arc<dyn InterpretationClient>) -> Self {
        self.interpreter = Some(client);
        self
    }

    pub fn with_session_idle(mut self, idle: Duration) -> Self {
        self.session_idle = idle;
        self
    }

    pub fn build(self) -> Result<AppState, ConfigError> {
        let readings = ReadingContext::from_config(&self.reading_config)?;
        let interpreter = match self.interpreter {
            Some(client) => client,
            None => {
                info!(
                    base_url = %self.interpreter_settings.base_url,
                    model = %self.interpreter_settings.model,
                    "interpreter configured"
                );
                Arc::new(ChatCompletionsClient::new(&self.interpreter_settings))
            }
        };
        Ok(AppState::new(
            readings,
            interpreter,
            SessionStore::new(self.session_idle),
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
