//! Shared, immutable reading setup built once from [`ReadingConfig`].

use std::sync::Arc;

use crate::config::{ConfigError, ReadingConfig};
use crate::domain::{
    source_for_seed, DeckVariant, DrawEngine, DrawSettings, PromptBuilder, SpreadCatalog,
    ThemeAssetMap,
};
use crate::interpretation::GenerationParams;

#[derive(Debug, Clone)]
pub struct ReadingContext {
    catalog: Arc<SpreadCatalog>,
    prompts: PromptBuilder,
    draw_settings: DrawSettings,
    generation: GenerationParams,
    assets: ThemeAssetMap,
    default_deck: DeckVariant,
}

impl ReadingContext {
    pub fn from_config(config: &ReadingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog: Arc::new(config.catalog()?),
            prompts: PromptBuilder::new(config.persona_presets()?),
            draw_settings: config.draw_settings(),
            generation: config.generation,
            assets: config.theme_assets.clone(),
            default_deck: config.default_deck,
        })
    }

    /// A draw engine over the shared catalog. `Some(seed)` makes every
    /// shuffle and reversal reproducible.
    pub fn new_engine(&self, seed: Option<u64>) -> DrawEngine {
        DrawEngine::new(
            Arc::clone(&self.catalog),
            self.draw_settings.clone(),
            source_for_seed(seed),
        )
    }

    pub fn catalog(&self) -> &SpreadCatalog {
        &self.catalog
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    pub fn draw_settings(&self) -> &DrawSettings {
        &self.draw_settings
    }

    pub fn generation(&self) -> GenerationParams {
        self.generation
    }

    pub fn assets(&self) -> &ThemeAssetMap {
        &self.assets
    }

    pub fn default_deck(&self) -> DeckVariant {
        self.default_deck
    }
}

impl Default for ReadingContext {
    fn default() -> Self {
        let config = ReadingConfig::default();
        Self {
            catalog: Arc::new(SpreadCatalog::builtin()),
            prompts: PromptBuilder::default(),
            draw_settings: config.draw_settings(),
            generation: config.generation,
            assets: config.theme_assets,
            default_deck: config.default_deck,
        }
    }
}
