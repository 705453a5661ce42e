//! Reading configuration: every tunable that varied between prototypes.
//!
//! Loaded from the JSON file named by `TAROT_READING_CONFIG`; omitted fields
//! keep their defaults.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::ConfigError;
use crate::domain::draw_engine::{DEFAULT_REENTRY_WINDOW, DEFAULT_REVERSAL_PROBABILITY};
use crate::domain::{DeckVariant, DrawSettings, PersonaPresets, SpreadCatalog, SpreadDefinition, ThemeAssetMap};
use crate::interpretation::GenerationParams;

pub const READING_CONFIG_ENV: &str = "TAROT_READING_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadingConfig {
    pub reversal_probability: f64,
    pub reentry_window_ms: u64,
    pub default_deck: DeckVariant,
    pub generation: GenerationParams,
    /// Persona name -> system template overriding the builtin one.
    pub personas: BTreeMap<String, String>,
    /// Replaces the builtin spread table when present.
    pub spreads: Option<Vec<SpreadDefinition>>,
    pub theme_assets: ThemeAssetMap,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
            reentry_window_ms: DEFAULT_REENTRY_WINDOW.as_millis() as u64,
            default_deck: DeckVariant::Full,
            generation: GenerationParams::default(),
            personas: BTreeMap::new(),
            spreads: None,
            theme_assets: ThemeAssetMap::builtin(),
        }
    }
}

impl ReadingConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "reading configuration loaded");
        Ok(config)
    }

    /// Defaults unless `TAROT_READING_CONFIG` names a file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(READING_CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reversal_probability) {
            return Err(ConfigError::InvalidValue {
                name: "reversal_probability",
                detail: format!("{} is outside 0.0..=1.0", self.reversal_probability),
            });
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::InvalidValue {
                name: "generation.temperature",
                detail: format!("{} is outside 0.0..=2.0", self.generation.temperature),
            });
        }
        if self.generation.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                name: "generation.max_tokens",
                detail: "must be greater than zero".to_string(),
            });
        }
        let catalog = self.catalog()?;
        let largest = catalog.largest_required_count();
        if largest > self.default_deck.size() {
            return Err(ConfigError::InvalidValue {
                name: "default_deck",
                detail: format!(
                    "{} holds {} cards but a spread needs {largest}",
                    self.default_deck,
                    self.default_deck.size()
                ),
            });
        }
        self.persona_presets()?;
        Ok(())
    }

    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            reversal_probability: self.reversal_probability,
            reentry_window: Duration::from_millis(self.reentry_window_ms),
        }
    }

    pub fn catalog(&self) -> Result<SpreadCatalog, ConfigError> {
        match &self.spreads {
            None => Ok(SpreadCatalog::builtin()),
            Some(spreads) => {
                SpreadCatalog::new(spreads.clone()).map_err(|e| ConfigError::InvalidValue {
                    name: "spreads",
                    detail: e.to_string(),
                })
            }
        }
    }

    pub fn persona_presets(&self) -> Result<PersonaPresets, ConfigError> {
        PersonaPresets::with_overrides(&self.personas).map_err(|e| ConfigError::InvalidValue {
            name: "personas",
            detail: e.to_string(),
        })
    }
}
