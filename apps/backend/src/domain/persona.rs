//! Persona presets: the tone an interpretation is written in.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Placeholder a persona template may use for the persona's display name.
pub const PERSONA_PLACEHOLDER: &str = "{persona}";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaStyle {
    /// Soothing, optimistic Tarot Master.
    #[default]
    Classic,
    /// Dark and poetic, but protective.
    Goth,
    /// Energetic and dramatic.
    Anime,
    /// Plain-spoken, no sugarcoating.
    Direct,
}

impl PersonaStyle {
    pub const ALL: [PersonaStyle; 4] = [
        PersonaStyle::Classic,
        PersonaStyle::Goth,
        PersonaStyle::Anime,
        PersonaStyle::Direct,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaStyle::Classic => "classic",
            PersonaStyle::Goth => "goth",
            PersonaStyle::Anime => "anime",
            PersonaStyle::Direct => "direct",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PersonaStyle::Classic => "Classic",
            PersonaStyle::Goth => "Goth",
            PersonaStyle::Anime => "Anime",
            PersonaStyle::Direct => "Direct",
        }
    }

    fn builtin_template(self) -> &'static str {
        match self {
            PersonaStyle::Classic => {
                "You are a wise, benevolent tarot master reading a {persona} deck.\n\
                 Your tone is soothing, optimistic and encouraging.\n\
                 You focus on growth, healing and the abundance coming into the querent's life.\n\
                 Never predict doom: a hard card is a necessary release or a new beginning."
            }
            PersonaStyle::Goth => {
                "You are the Oracle of the Void, reading a {persona} deck.\n\
                 Your tone is dark and poetic, but ultimately protective.\n\
                 You help the querent find the light within the darkness: even the abyss has a \
                 bottom, and you are the guide back up."
            }
            PersonaStyle::Anime => {
                "You are a spirited Fate Weaver from an anime world, reading a {persona} deck.\n\
                 Your tone is energetic, empowering and dramatic.\n\
                 Frame every challenge as a training arc or a boss battle the querent is destined to win."
            }
            PersonaStyle::Direct => {
                "You are a direct, no-nonsense tarot reader ({persona} style).\n\
                 You speak clearly, with empathy but without sugarcoating or vague spiritual fluff.\n\
                 Stay on emotional, psychological and practical guidance; never predict death, \
                 illness or medical outcomes."
            }
        }
    }
}

impl fmt::Display for PersonaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PersonaStyle::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownPersona,
                    format!("Unknown persona: {s}"),
                )
            })
    }
}

/// Persona templates, builtin unless overridden by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaPresets {
    overrides: BTreeMap<PersonaStyle, String>,
}

impl PersonaPresets {
    /// Build from `persona name -> template` pairs; unknown names are rejected.
    pub fn with_overrides(raw: &BTreeMap<String, String>) -> Result<Self, DomainError> {
        let mut overrides = BTreeMap::new();
        for (name, template) in raw {
            overrides.insert(name.parse::<PersonaStyle>()?, template.clone());
        }
        Ok(Self { overrides })
    }

    /// The system block for a persona. Only the persona name is interpolated.
    pub fn system_prompt(&self, persona: PersonaStyle) -> String {
        let template = self
            .overrides
            .get(&persona)
            .map(String::as_str)
            .unwrap_or_else(|| persona.builtin_template());
        template.replace(PERSONA_PLACEHOLDER, persona.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_personas() {
        assert_eq!("GOTH".parse::<PersonaStyle>().unwrap(), PersonaStyle::Goth);
        assert_eq!("direct".parse::<PersonaStyle>().unwrap(), PersonaStyle::Direct);
        assert!("cheerful".parse::<PersonaStyle>().is_err());
    }

    #[test]
    fn builtin_templates_interpolate_persona_name_only() {
        let presets = PersonaPresets::default();
        for persona in PersonaStyle::ALL {
            let system = presets.system_prompt(persona);
            assert!(system.contains(persona.display_name()));
            assert!(!system.contains(PERSONA_PLACEHOLDER));
        }
    }

    #[test]
    fn overrides_replace_builtin_template() {
        let mut raw = BTreeMap::new();
        raw.insert("anime".to_string(), "Be {persona}!".to_string());
        let presets = PersonaPresets::with_overrides(&raw).unwrap();
        assert_eq!(presets.system_prompt(PersonaStyle::Anime), "Be Anime!");
        // Others untouched
        assert!(presets
            .system_prompt(PersonaStyle::Goth)
            .contains("Oracle of the Void"));
    }

    #[test]
    fn overrides_reject_unknown_persona() {
        let mut raw = BTreeMap::new();
        raw.insert("pirate".to_string(), "Arr".to_string());
        assert!(PersonaPresets::with_overrides(&raw).is_err());
    }
}
