//! Spread catalog: how many cards a layout takes and what each position means.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadDefinition {
    pub id: String,
    pub title: String,
    pub required_count: usize,
    #[serde(default)]
    pub position_labels: Vec<String>,
}

impl SpreadDefinition {
    /// A spread whose card count is the number of labels.
    pub fn new(id: &str, title: &str, labels: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            required_count: labels.len(),
            position_labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Label for a 0-based position, `"Card N"` when the list runs short.
    pub fn position_label(&self, position: usize) -> String {
        self.position_labels
            .get(position)
            .cloned()
            .unwrap_or_else(|| format!("Card {}", position + 1))
    }

    fn matches(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown spread: {0}")]
    UnknownSpread(String),
    #[error("duplicate spread id: {0}")]
    DuplicateSpread(String),
    #[error("spread {0} must require at least one card")]
    EmptySpread(String),
    #[error("spread {id} has {labels} position labels but requires {required} cards")]
    TooManyLabels {
        id: String,
        labels: usize,
        required: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadCatalog {
    spreads: Vec<SpreadDefinition>,
}

impl SpreadCatalog {
    /// Validate and wrap a list of definitions.
    ///
    /// Label lists shorter than `required_count` are accepted; the missing
    /// positions resolve to the `"Card N"` fallback.
    pub fn new(spreads: Vec<SpreadDefinition>) -> Result<Self, CatalogError> {
        for (idx, spread) in spreads.iter().enumerate() {
            if spread.required_count == 0 {
                return Err(CatalogError::EmptySpread(spread.id.clone()));
            }
            if spread.position_labels.len() > spread.required_count {
                return Err(CatalogError::TooManyLabels {
                    id: spread.id.clone(),
                    labels: spread.position_labels.len(),
                    required: spread.required_count,
                });
            }
            if spreads[..idx].iter().any(|earlier| earlier.matches(&spread.id)) {
                return Err(CatalogError::DuplicateSpread(spread.id.clone()));
            }
        }
        Ok(Self { spreads })
    }

    /// The spreads the prototypes shipped with.
    pub fn builtin() -> Self {
        Self {
            spreads: builtin_spreads(),
        }
    }

    pub fn spread_definition(&self, id: &str) -> Result<&SpreadDefinition, CatalogError> {
        self.spreads
            .iter()
            .find(|spread| spread.matches(id))
            .ok_or_else(|| CatalogError::UnknownSpread(id.to_string()))
    }

    pub fn spreads(&self) -> &[SpreadDefinition] {
        &self.spreads
    }

    pub fn largest_required_count(&self) -> usize {
        self.spreads
            .iter()
            .map(|s| s.required_count)
            .max()
            .unwrap_or(0)
    }
}

impl Default for SpreadCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_spreads() -> Vec<SpreadDefinition> {
    vec![
        SpreadDefinition::new("one", "One Card Pull", &["The Insight"]),
        SpreadDefinition::new(
            "three",
            "Past / Present / Future",
            &["Past", "Present", "Future"],
        ),
        SpreadDefinition::new(
            "mind-body-spirit",
            "Mind Body Spirit",
            &[
                "Mind (Mental State)",
                "Body (Physical Reality)",
                "Spirit (Inner Self)",
            ],
        ),
        SpreadDefinition::new(
            "career",
            "Career & Wealth",
            &["Current Situation", "Challenges", "Outcome"],
        ),
        SpreadDefinition::new(
            "love",
            "Love & Connection",
            &["You", "Them", "The Dynamic"],
        ),
        SpreadDefinition::new(
            "horseshoe",
            "Horseshoe Spread",
            &[
                "The Past",
                "The Present",
                "Hidden Influences",
                "Obstacles",
                "External Influences",
                "Action to Take",
                "The Outcome",
            ],
        ),
        SpreadDefinition::new(
            "nine",
            "Nine Card Destiny Grid",
            &[
                "Past Mind",
                "Past Body",
                "Past Spirit",
                "Present Mind",
                "Present Body",
                "Present Spirit",
                "Future Mind",
                "Future Body",
                "Future Spirit",
            ],
        ),
        SpreadDefinition::new(
            "celtic-cross",
            "Celtic Cross",
            &[
                "The Heart of the Matter",
                "The Challenge",
                "The Root",
                "The Past",
                "The Crown",
                "The Future",
                "Self Perception",
                "Environment",
                "Hopes & Fears",
                "The Outcome",
            ],
        ),
    ]
}
