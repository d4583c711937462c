use std::fmt;

/// An sRGB color from the card catalog, stored as 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Channels scaled to 0.0-1.0 for PDF color operators
    pub fn to_unit(&self) -> (f32, f32, f32) {
        let scale = |v: u8| v as f32 / 255.0;
        (scale(self.r), scale(self.g), scale(self.b))
    }

    /// Perceived brightness, 0.0 (black) to 1.0 (white)
    pub fn luminance(&self) -> f32 {
        let (r, g, b) = self.to_unit();
        0.299 * r + 0.587 * g + 0.114 * b
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Kind tag shared by every card variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Property,
    Action,
    Player,
}

/// The deck an action card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionDeck {
    Chance,
    CommunityChest,
}

/// Number of rent tiers on a title deed: base rent, 1-4 houses, hotel
pub const RENT_TIERS: usize = 5;

/// A title deed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCard {
    /// Position on the board, 1-based and unique
    pub board_number: u8,
    pub name: String,
    pub color: HexColor,
    pub price: Option<u32>,
    /// Tier 0 is the base rent, tiers 1-4 escalate
    pub rents: [u32; RENT_TIERS],
}

/// A Chance or Community Chest card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCard {
    pub deck: ActionDeck,
    /// 1-based position within its deck
    pub index: u32,
    pub name: String,
    pub text: String,
}

/// Icon drawn on the back of a player card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenIcon {
    Hat,
    Dog,
    Car,
    Ship,
    Cat,
    Boot,
    Thimble,
    Wheelbarrow,
}

/// A player reference card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    /// 1-based position within the player deck
    pub index: u32,
    /// Serial-number flavor text, see [`crate::model::deck::card_number`]
    pub card_number: String,
    pub token_name: String,
    pub token_icon: TokenIcon,
    pub token_color: HexColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Property(PropertyCard),
    Action(ActionCard),
    Player(PlayerCard),
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Property(_) => CardKind::Property,
            Card::Action(_) => CardKind::Action,
            Card::Player(_) => CardKind::Player,
        }
    }

    /// Display name used in logs and the layout debug output
    pub fn name(&self) -> String {
        match self {
            Card::Property(p) => p.name.clone(),
            Card::Action(a) => a.name.clone(),
            Card::Player(p) => p.token_name.clone(),
        }
    }

    /// Short identifier, e.g. `P07`, `CH3`, `CC16`, `PL2`
    pub fn short_id(&self) -> String {
        match self {
            Card::Property(p) => format!("P{:02}", p.board_number),
            Card::Action(a) => match a.deck {
                ActionDeck::Chance => format!("CH{}", a.index),
                ActionDeck::CommunityChest => format!("CC{}", a.index),
            },
            Card::Player(p) => format!("PL{}", p.index),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_id(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_channels() {
        let c = HexColor::from_rgb(0x8a5629);
        assert_eq!((c.r, c.g, c.b), (0x8a, 0x56, 0x29));
        assert_eq!(c.to_string(), "#8a5629");
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(HexColor::from_rgb(0xffffff).luminance() > 0.99);
        assert!(HexColor::from_rgb(0x000000).luminance() < 0.01);
    }

    #[test]
    fn test_short_ids() {
        let chance = Card::Action(ActionCard {
            deck: ActionDeck::Chance,
            index: 3,
            name: "Chance 3".to_string(),
            text: String::new(),
        });
        assert_eq!(chance.short_id(), "CH3");
        assert_eq!(chance.kind(), CardKind::Action);
    }
}
