//! Prompt construction: turns a reading into a `{system, user}` request.
//!
//! Pure and deterministic. The user block lists every drawn card exactly
//! once, in position order, with an explicit orientation marker.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::{DrawnCard, PersonaPresets, PersonaStyle, Reading};

/// The payload handed to an interpretation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    pub system: String,
    pub user: String,
}

impl InterpretationRequest {
    /// Both blocks as one prompt, for backends that take a single string.
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

const INSTRUCTIONS: &str = "\
INSTRUCTIONS:
1. Summary: open with a direct three-sentence overview of the energy around the question.
2. Card by card: interpret each card in its position, naming both the card and the position. \
A REVERSED card shows its meaning blocked, delayed or turned inward; present it as something the querent can work with.
3. Next steps: close with three concrete, practical actions tailored to the question.

FORMAT:
- Short headings followed by plain paragraphs.
- Roughly 400 to 600 words in total.";

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    presets: PersonaPresets,
}

impl PromptBuilder {
    pub fn new(presets: PersonaPresets) -> Self {
        Self { presets }
    }

    pub fn build_request(&self, reading: &Reading, persona: PersonaStyle) -> InterpretationRequest {
        InterpretationRequest {
            system: self.presets.system_prompt(persona),
            user: user_block(reading),
        }
    }
}

/// One line per card: `- <label>: <name> (UPRIGHT|REVERSED)`.
pub fn card_line(card: &DrawnCard) -> String {
    format!(
        "- {}: {} ({})",
        card.position_label,
        card.card.name(),
        card.orientation().marker()
    )
}

fn user_block(reading: &Reading) -> String {
    let mut cards: Vec<&DrawnCard> = reading.cards().iter().collect();
    cards.sort_by_key(|c| c.position);

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "THE CARDS DRAWN:");
    for card in cards {
        let _ = writeln!(out, "{}", card_line(card));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "CONTEXT:");
    let _ = writeln!(
        out,
        "- Spread: {} ({} cards)",
        reading.spread().title,
        reading.required_count()
    );
    let _ = writeln!(out, "- Question: \"{}\"", reading.question());
    let _ = writeln!(out);
    out.push_str(INSTRUCTIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::{SubmittedCard, DEFAULT_QUESTION};
    use crate::domain::SpreadCatalog;

    fn reading(question: &str) -> Reading {
        let spread = SpreadCatalog::builtin()
            .spread_definition("three")
            .unwrap()
            .clone();
        let cards = [("The Tower", true), ("Ace of Cups", false), ("The Star", false)]
            .iter()
            .map(|(name, is_reversed)| SubmittedCard {
                name: name.to_string(),
                is_reversed: *is_reversed,
            })
            .collect::<Vec<_>>();
        Reading::from_submitted(spread, question, PersonaStyle::Direct, &cards).unwrap()
    }

    #[test]
    fn cards_are_listed_in_position_order_with_markers() {
        let request = PromptBuilder::default().build_request(&reading("Move?"), PersonaStyle::Direct);
        let past = request.user.find("- Past: The Tower (REVERSED)").unwrap();
        let present = request.user.find("- Present: Ace of Cups (UPRIGHT)").unwrap();
        let future = request.user.find("- Future: The Star (UPRIGHT)").unwrap();
        assert!(past < present && present < future);
        assert!(request.user.contains("- Question: \"Move?\""));
    }

    #[test]
    fn empty_question_uses_default_text() {
        let request = PromptBuilder::default().build_request(&reading(""), PersonaStyle::Classic);
        assert!(request
            .user
            .contains(&format!("- Question: \"{DEFAULT_QUESTION}\"")));
    }

    #[test]
    fn output_is_deterministic() {
        let builder = PromptBuilder::default();
        let r = reading("Same?");
        assert_eq!(
            builder.build_request(&r, PersonaStyle::Goth),
            builder.build_request(&r, PersonaStyle::Goth)
        );
    }

    #[test]
    fn persona_only_changes_the_system_block() {
        let builder = PromptBuilder::default();
        let r = reading("Tone?");
        let goth = builder.build_request(&r, PersonaStyle::Goth);
        let anime = builder.build_request(&r, PersonaStyle::Anime);
        assert_eq!(goth.user, anime.user);
        assert_ne!(goth.system, anime.system);
    }

    #[test]
    fn combined_joins_system_and_user() {
        let request = InterpretationRequest {
            system: "S".into(),
            user: "U".into(),
        };
        assert_eq!(request.combined(), "S\n\nU");
    }
}
