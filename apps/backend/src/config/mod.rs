//! Runtime configuration read from the environment at startup.

pub mod interpreter;
pub mod reading;

use std::env;
use std::time::Duration;

use thiserror::Error;

pub use interpreter::InterpreterSettings;
pub use reading::ReadingConfig;

/// Default idle lifetime of an interactive session.
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid reading configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {name}: {detail}")]
    InvalidValue { name: &'static str, detail: String },
}

/// Parse an optional numeric env var, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    name,
                    detail: format!("{raw:?}: {e}"),
                })
        }
        _ => Ok(default),
    }
}

/// `SESSION_IDLE_SECS`, default 30 minutes. Zero is rejected.
pub fn session_idle_from_env() -> Result<Duration, ConfigError> {
    let secs = parse_var("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?;
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            name: "SESSION_IDLE_SECS",
            detail: "must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
