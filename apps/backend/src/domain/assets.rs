//! Card art lookup. Every card always has a text-only rendering to fall back on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::deck::card_by_name;

pub const DEFAULT_ASSET_BASE_URL: &str = "https://killer7wayes-lab.github.io/TarotAssets/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardArt {
    Image { url: String },
    TextOnly { name: String },
}

/// Where each theme's card images live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeAssetMap {
    pub base_url: String,
    /// Theme name (lowercase) -> path under `base_url`.
    pub themes: BTreeMap<String, String>,
    /// Generated file name -> file name actually published.
    pub file_overrides: BTreeMap<String, String>,
}

impl ThemeAssetMap {
    /// The published asset layout.
    pub fn builtin() -> Self {
        let themes = [
            ("anime", "decks/anime/"),
            ("classic", "decks/anime/decks/classic/"),
            ("goth", "decks/anime/decks/goth/"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let file_overrides = [("ace_of_swords.webp", "ace__of_swords.webp")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            themes,
            file_overrides,
        }
    }

    /// No themes at all; everything renders as text.
    pub fn empty() -> Self {
        Self {
            base_url: String::new(),
            themes: BTreeMap::new(),
            file_overrides: BTreeMap::new(),
        }
    }

    pub fn resolve_card_art(&self, card_name: &str, theme: &str) -> CardArt {
        let Some(card) = card_by_name(card_name) else {
            return CardArt::TextOnly {
                name: card_name.trim().to_string(),
            };
        };
        let text_only = || CardArt::TextOnly {
            name: card.name().to_string(),
        };
        if self.base_url.is_empty() {
            return text_only();
        }
        let Some(path) = self.themes.get(&theme.trim().to_ascii_lowercase()) else {
            return text_only();
        };

        let file = asset_file_name(card.name());
        let file = self.file_overrides.get(&file).cloned().unwrap_or(file);
        CardArt::Image {
            url: format!("{}{}{}", with_slash(&self.base_url), with_slash(path), file),
        }
    }
}

impl Default for ThemeAssetMap {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `"The High Priestess"` -> `"the_high_priestess.webp"`.
pub fn asset_file_name(card_name: &str) -> String {
    let stem = card_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_");
    format!("{stem}.webp")
}

fn with_slash(s: &str) -> String {
    if s.is_empty() || s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}
