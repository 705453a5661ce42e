use std::env;

use tracing::warn;

use super::{parse_var, ConfigError};

pub const DEFAULT_INTERPRETER_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_INTERPRETER_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_INTERPRETER_TIMEOUT_SECS: u64 = 120;

/// Where and how to reach the chat completions service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterSettings {
    pub base_url: String,
    pub model: String,
    /// Local runtimes such as Ollama need no key.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for InterpreterSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INTERPRETER_BASE_URL.to_string(),
            model: DEFAULT_INTERPRETER_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_INTERPRETER_TIMEOUT_SECS,
        }
    }
}

impl InterpreterSettings {
    /// Read `INTERPRETER_BASE_URL`, `INTERPRETER_MODEL`, `INTERPRETER_API_KEY`
    /// and `INTERPRETER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let base_url = non_empty_var("INTERPRETER_BASE_URL").unwrap_or(defaults.base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                name: "INTERPRETER_BASE_URL",
                detail: format!("{base_url:?} is not an http(s) URL"),
            });
        }
        let model = non_empty_var("INTERPRETER_MODEL").unwrap_or(defaults.model);
        let api_key = non_empty_var("INTERPRETER_API_KEY");
        if api_key.is_none() {
            warn!("INTERPRETER_API_KEY is not set; requests are sent without authorization");
        }
        let timeout_secs = parse_var("INTERPRETER_TIMEOUT_SECS", defaults.timeout_secs)?;

        Ok(Self {
            base_url,
            model,
            api_key,
            timeout_secs,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
