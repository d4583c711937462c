pub mod card;
pub mod catalog;
pub mod deck;
pub mod language;

pub use card::{
    ActionCard, ActionDeck, Card, CardKind, HexColor, PlayerCard, PropertyCard, TokenIcon,
    RENT_TIERS,
};
pub use deck::{assemble_deck, card_number};
pub use language::{Label, Language};
