use super::card::{ActionCard, ActionDeck, Card, PlayerCard, PropertyCard};
use super::catalog::{chance_texts, community_texts, PLAYER_TOKENS, PROPERTIES};
use super::language::{Label, Language};

/// `(base, multiplier)` for each digit group of a player card number
///
/// Cosmetic parameters only. The resulting numbers are decoration printed on the
/// card and must never be treated as identifiers: collisions are possible.
const CARD_NUMBER_GROUPS: [(u32, u32); 4] = [(0, 1), (1952, 137), (5231, 211), (5462, 307)];

/// Serial-number style flavor text for the player card with 1-based `index`
///
/// Each group is `(base + index * multiplier) mod 10000`, zero-padded to four digits.
pub fn card_number(index: u32) -> String {
    CARD_NUMBER_GROUPS
        .iter()
        .map(|&(base, multiplier)| {
            let value = (base as u64 + index as u64 * multiplier as u64) % 10_000;
            format!("{:04}", value)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the ordered list of cards to print
///
/// Properties come first, then player cards, then (when `include_action_decks` is set)
/// Chance followed by Community Chest. The language changes text only, never the
/// number or order of cards.
pub fn assemble_deck(language: Language, include_action_decks: bool) -> Vec<Card> {
    let mut cards: Vec<Card> = PROPERTIES
        .iter()
        .map(|spec| {
            Card::Property(PropertyCard {
                board_number: spec.board_number,
                name: spec.name.to_string(),
                color: spec.color,
                price: spec.price,
                rents: spec.rents,
            })
        })
        .collect();

    cards.extend(PLAYER_TOKENS.iter().zip(1u32..).map(|(token, index)| {
        Card::Player(PlayerCard {
            index,
            card_number: card_number(index),
            token_name: token.name(language).to_string(),
            token_icon: token.icon,
            token_color: token.color,
        })
    }));

    if include_action_decks {
        cards.extend(action_cards(language, ActionDeck::Chance));
        cards.extend(action_cards(language, ActionDeck::CommunityChest));
    }

    log::debug!(
        "Assembled {} cards (language: {}, action decks: {})",
        cards.len(),
        language,
        include_action_decks
    );

    cards
}

fn action_cards(language: Language, deck: ActionDeck) -> impl Iterator<Item = Card> {
    let (title, texts) = match deck {
        ActionDeck::Chance => (language.text(Label::Chance), chance_texts(language)),
        ActionDeck::CommunityChest => (
            language.text(Label::CommunityChest),
            community_texts(language),
        ),
    };

    texts.iter().zip(1u32..).map(move |(text, index)| {
        Card::Action(ActionCard {
            deck,
            index,
            name: format!("{} {}", title, index),
            text: text.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardKind;

    #[test]
    fn test_card_number_first_player() {
        // 1952+137=2089, 5231+211=5442, 5462+307=5769
        assert_eq!(card_number(1), "0001 2089 5442 5769");
    }

    #[test]
    fn test_card_number_wraps_modulo() {
        // 1952 + 80*137 = 12912 -> 2912
        let number = card_number(80);
        let groups: Vec<&str> = number.split(' ').collect();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0], "0080");
        assert_eq!(groups[1], "2912");
        assert!(groups.iter().all(|g| g.len() == 4));
    }

    #[test]
    fn test_deck_without_action_cards() {
        for language in Language::all() {
            let deck = assemble_deck(language, false);
            assert_eq!(deck.len(), 22 + 8);
            assert!(deck.iter().all(|c| c.kind() != CardKind::Action));
        }
    }

    #[test]
    fn test_deck_order_with_action_cards() {
        let deck = assemble_deck(Language::En, true);
        assert_eq!(deck.len(), 22 + 8 + 16 + 16);

        let kinds: Vec<CardKind> = deck.iter().map(|c| c.kind()).collect();
        assert!(kinds[..22].iter().all(|k| *k == CardKind::Property));
        assert!(kinds[22..30].iter().all(|k| *k == CardKind::Player));
        assert!(kinds[30..].iter().all(|k| *k == CardKind::Action));

        match (&deck[30], &deck[46]) {
            (Card::Action(first_chance), Card::Action(first_chest)) => {
                assert_eq!(first_chance.deck, ActionDeck::Chance);
                assert_eq!(first_chance.name, "Chance 1");
                assert_eq!(first_chest.deck, ActionDeck::CommunityChest);
                assert_eq!(first_chest.name, "Community Chest 1");
            }
            other => panic!("unexpected cards at deck boundaries: {:?}", other),
        }
    }

    #[test]
    fn test_player_cards_follow_properties() {
        let deck = assemble_deck(Language::Es, false);
        match &deck[22] {
            Card::Player(p) => {
                assert_eq!(p.index, 1);
                assert_eq!(p.token_name, "SOMBRERO");
                assert_eq!(p.card_number, card_number(1));
            }
            other => panic!("expected player card, got {:?}", other),
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        assert_eq!(assemble_deck(Language::Es, true), assemble_deck(Language::Es, true));
    }
}
