//! Domain layer: deck, spreads, draw engine and prompt construction.
//!
//! Everything here is synchronous and free of I/O.

pub mod assets;
pub mod cards_types;
pub mod deck;
pub mod draw_engine;
pub mod persona;
pub mod prompt;
pub mod reading;
pub mod shuffle;
pub mod spreads;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_deck;
#[cfg(test)]
mod tests_props_draw_engine;

// Re-exports for ergonomics
pub use assets::{CardArt, ThemeAssetMap};
pub use cards_types::{Card, Suit};
pub use deck::{build_deck, canonical_deck, card_by_name, DeckVariant, FULL_DECK_SIZE};
pub use draw_engine::{DrawEngine, DrawError, DrawOutcome, DrawSettings, DrawState};
pub use persona::{PersonaPresets, PersonaStyle};
pub use prompt::{InterpretationRequest, PromptBuilder};
pub use reading::{DrawnCard, Orientation, Reading, SubmittedCard, DEFAULT_QUESTION};
pub use shuffle::{source_for_seed, RandomSource, RngSource};
pub use spreads::{CatalogError, SpreadCatalog, SpreadDefinition};
