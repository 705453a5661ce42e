//! Deck construction and variants.

use std::collections::HashSet;

use crate::domain::{build_deck, canonical_deck, card_by_name, DeckVariant, Suit, FULL_DECK_SIZE};

#[test]
fn deck_has_78_unique_names() {
    let deck = build_deck();
    assert_eq!(deck.len(), FULL_DECK_SIZE);
    let names: HashSet<&str> = deck.iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), FULL_DECK_SIZE);
}

#[test]
fn majors_are_ranked_0_to_21_in_order() {
    let majors: Vec<_> = canonical_deck().iter().filter(|c| c.is_major()).collect();
    assert_eq!(majors.len(), 22);
    for (idx, card) in majors.iter().enumerate() {
        assert_eq!(card.rank() as usize, idx);
    }
    assert_eq!(majors[0].name(), "The Fool");
    assert_eq!(majors[21].name(), "The World");
}

#[test]
fn each_minor_suit_runs_ace_to_king() {
    for suit in Suit::MINOR {
        let cards: Vec<_> = canonical_deck().iter().filter(|c| c.suit() == suit).collect();
        assert_eq!(cards.len(), 14, "suit {suit}");
        let ranks: Vec<u8> = cards.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, (1..=14).collect::<Vec<u8>>());
        assert_eq!(cards[0].name(), format!("Ace of {suit}"));
        assert_eq!(cards[13].name(), format!("King of {suit}"));
    }
}

#[test]
fn canonical_order_is_majors_then_wands_cups_swords_pentacles() {
    let deck = canonical_deck();
    assert_eq!(deck[22].name(), "Ace of Wands");
    assert_eq!(deck[36].name(), "Ace of Cups");
    assert_eq!(deck[50].name(), "Ace of Swords");
    assert_eq!(deck[64].name(), "Ace of Pentacles");
    assert_eq!(deck[77].name(), "King of Pentacles");
}

#[test]
fn lookup_by_name_ignores_case() {
    assert_eq!(card_by_name("the hanged man").unwrap().name(), "The Hanged Man");
    assert_eq!(card_by_name(" KNIGHT OF SWORDS ").unwrap().rank(), 12);
    assert!(card_by_name("The Joker").is_none());
}

#[test]
fn variant_sizes() {
    assert_eq!(DeckVariant::Full.size(), 78);
    assert_eq!(DeckVariant::MajorArcana.size(), 22);
    assert_eq!(DeckVariant::MajorsAndAces.size(), 26);

    let aces: Vec<_> = DeckVariant::MajorsAndAces
        .cards()
        .into_iter()
        .filter(|c| !c.is_major())
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(
        aces,
        vec!["Ace of Wands", "Ace of Cups", "Ace of Swords", "Ace of Pentacles"]
    );
}

#[test]
fn variant_names_round_trip_through_str() {
    for variant in DeckVariant::ALL {
        assert_eq!(variant.as_str().parse::<DeckVariant>().unwrap(), variant);
    }
    assert!("tiny".parse::<DeckVariant>().is_err());
}
