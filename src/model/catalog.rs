//! Static card catalog
//!
//! Property deeds, Chance and Community Chest texts, and player tokens. Everything
//! here is plain data; [`crate::model::deck::assemble_deck`] turns it into cards.

use super::card::{HexColor, TokenIcon, RENT_TIERS};
use super::language::Language;

/// Catalog entry for a title deed
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    pub board_number: u8,
    pub name: &'static str,
    pub color: HexColor,
    pub price: Option<u32>,
    pub rents: [u32; RENT_TIERS],
}

/// Catalog entry for a player token
#[derive(Debug, Clone, Copy)]
pub struct TokenSpec {
    pub name_en: &'static str,
    pub name_es: &'static str,
    pub icon: TokenIcon,
    pub color: HexColor,
}

impl TokenSpec {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.name_en,
            Language::Es => self.name_es,
        }
    }
}

const BROWN: HexColor = HexColor::from_rgb(0x8a5629);
const LIGHT_BLUE: HexColor = HexColor::from_rgb(0x97cdee);
const PINK: HexColor = HexColor::from_rgb(0xdd4c9e);
const ORANGE: HexColor = HexColor::from_rgb(0xf2a12f);
const RED: HexColor = HexColor::from_rgb(0xee3f39);
const YELLOW: HexColor = HexColor::from_rgb(0xefe249);
const GREEN: HexColor = HexColor::from_rgb(0x36b24a);
const DARK_BLUE: HexColor = HexColor::from_rgb(0x356fbb);

const fn deed(
    board_number: u8,
    name: &'static str,
    color: HexColor,
    rents: [u32; RENT_TIERS],
) -> PropertySpec {
    PropertySpec {
        board_number,
        name,
        color,
        price: None,
        rents,
    }
}

pub const PROPERTIES: [PropertySpec; 22] = [
    deed(1, "Ronda de Valencia", BROWN, [70, 130, 220, 370, 750]),
    deed(2, "Plaza Lavapiés", BROWN, [70, 130, 220, 370, 750]),
    deed(3, "Glorieta Cuatro Caminos", LIGHT_BLUE, [80, 140, 240, 410, 800]),
    deed(4, "Avenida Reina Victoria", LIGHT_BLUE, [80, 140, 240, 410, 800]),
    deed(5, "Calle Bravo Murillo", LIGHT_BLUE, [100, 160, 260, 440, 860]),
    deed(6, "Glorieta de Bilbao", PINK, [110, 180, 290, 460, 900]),
    deed(7, "Calle Alberto Aguilera", PINK, [110, 180, 290, 460, 900]),
    deed(8, "Calle Fuencarral", PINK, [130, 200, 310, 490, 980]),
    deed(9, "Avenida Felipe II", ORANGE, [140, 210, 330, 520, 1000]),
    deed(10, "Calle Velázquez", ORANGE, [140, 210, 330, 520, 1000]),
    deed(11, "Calle Serrano", ORANGE, [160, 230, 350, 550, 1100]),
    deed(12, "Avenida de América", RED, [170, 250, 380, 580, 1160]),
    deed(13, "Calle María de Molina", RED, [170, 250, 380, 580, 1160]),
    deed(14, "Calle Cea Bermúdez", RED, [190, 270, 400, 610, 1200]),
    deed(15, "Avenida de los Reyes Católicos", YELLOW, [200, 280, 420, 640, 1300]),
    deed(16, "Calle Bailén", YELLOW, [200, 280, 420, 640, 1300]),
    deed(17, "Plaza de España", YELLOW, [220, 300, 440, 670, 1340]),
    deed(18, "Puerta del Sol", GREEN, [230, 320, 460, 700, 1400]),
    deed(19, "Calle Alcalá", GREEN, [230, 320, 460, 700, 1400]),
    deed(20, "Gran Vía", GREEN, [250, 340, 480, 730, 1440]),
    deed(21, "Paseo de la Castellana", DARK_BLUE, [270, 360, 510, 740, 1500]),
    deed(22, "Paseo del Prado", DARK_BLUE, [300, 400, 560, 810, 1600]),
];

pub const PLAYER_TOKENS: [TokenSpec; 8] = [
    TokenSpec {
        name_en: "HAT",
        name_es: "SOMBRERO",
        icon: TokenIcon::Hat,
        color: HexColor::from_rgb(0xf1d06b),
    },
    TokenSpec {
        name_en: "DOG",
        name_es: "PERRO",
        icon: TokenIcon::Dog,
        color: HexColor::from_rgb(0xffffff),
    },
    TokenSpec {
        name_en: "CAR",
        name_es: "COCHE",
        icon: TokenIcon::Car,
        color: HexColor::from_rgb(0xd94438),
    },
    TokenSpec {
        name_en: "SHIP",
        name_es: "BARCO",
        icon: TokenIcon::Ship,
        color: HexColor::from_rgb(0x4f79d9),
    },
    TokenSpec {
        name_en: "CAT",
        name_es: "GATO",
        icon: TokenIcon::Cat,
        color: HexColor::from_rgb(0x21bf59),
    },
    TokenSpec {
        name_en: "BOOT",
        name_es: "BOTA",
        icon: TokenIcon::Boot,
        color: HexColor::from_rgb(0xf39b34),
    },
    TokenSpec {
        name_en: "THIMBLE",
        name_es: "DEDAL",
        icon: TokenIcon::Thimble,
        color: HexColor::from_rgb(0x6ad8d3),
    },
    TokenSpec {
        name_en: "WHEELBARROW",
        name_es: "CARRETILLA",
        icon: TokenIcon::Wheelbarrow,
        color: HexColor::from_rgb(0xd6c46d),
    },
];

const CHANCE_EN: [&str; 16] = [
    "Advance to GO (Collect $200).",
    "Advance to Illinois Avenue. If you pass GO, collect $200.",
    "Advance to St. Charles Place. If you pass GO, collect $200.",
    "Advance token to nearest Utility. If unowned, you may buy it. If owned, roll dice and pay owner ten times amount shown.",
    "Advance token to nearest Railroad. If unowned, you may buy it. If owned, pay owner twice the normal rent.",
    "Advance token to nearest Railroad. If unowned, you may buy it. If owned, pay owner twice the normal rent.",
    "Advance to Boardwalk.",
    "Bank pays you dividend of $50.",
    "Get Out of Jail Free. This card may be kept until needed or traded.",
    "Go Back Three Spaces.",
    "Go to Jail. Go directly to Jail. Do not pass GO. Do not collect $200.",
    "Make general repairs on all your property: for each house pay $25, for each hotel pay $100.",
    "Pay poor tax of $15.",
    "Take a trip to Reading Railroad. If you pass GO, collect $200.",
    "You have been elected Chairman of the Board. Pay each player $50.",
    "Your building loan matures. Collect $150.",
];

const CHANCE_ES: [&str; 16] = [
    "Avanza a GO (cobras $200).",
    "Avanza a Avenida Illinois. Si pasas por GO, cobra $200.",
    "Avanza a Plaza St. Charles. Si pasas por GO, cobra $200.",
    "Avanza a la compania de servicios mas cercana. Si no tiene dueno, puedes comprarla. Si tiene dueno, tira dados y paga diez veces el valor.",
    "Avanza al ferrocarril mas cercano. Si no tiene dueno, puedes comprarlo. Si tiene dueno, paga el doble de la renta normal.",
    "Avanza al ferrocarril mas cercano. Si no tiene dueno, puedes comprarlo. Si tiene dueno, paga el doble de la renta normal.",
    "Avanza a Boardwalk.",
    "El banco te paga un dividendo de $50.",
    "Salir de la carcel gratis. Puedes guardar esta carta o negociarla.",
    "Retrocede tres casillas.",
    "Ve a la carcel. Ve directamente a la carcel. No pases por GO. No cobres $200.",
    "Haz reparaciones generales en tus propiedades: paga $25 por cada casa y $100 por cada hotel.",
    "Paga impuesto de pobreza de $15.",
    "Haz un viaje al Ferrocarril Reading. Si pasas por GO, cobra $200.",
    "Has sido elegido presidente de la junta. Paga $50 a cada jugador.",
    "Vence tu prestamo de construccion. Cobra $150.",
];

const COMMUNITY_EN: [&str; 16] = [
    "Advance to GO (Collect $200).",
    "Bank error in your favor. Collect $200.",
    "Doctor's fee. Pay $50.",
    "From sale of stock you get $50.",
    "Get Out of Jail Free. This card may be kept until needed or traded.",
    "Go to Jail. Go directly to Jail. Do not pass GO. Do not collect $200.",
    "Holiday fund matures. Receive $100.",
    "Income tax refund. Collect $20.",
    "It is your birthday. Collect $10 from each player.",
    "Life insurance matures. Collect $100.",
    "Pay hospital fees of $100.",
    "Pay school fees of $50.",
    "Receive $25 consultancy fee.",
    "You are assessed for street repair: $40 per house, $115 per hotel.",
    "You have won second prize in a beauty contest. Collect $10.",
    "You inherit $100.",
];

const COMMUNITY_ES: [&str; 16] = [
    "Avanza a GO (cobras $200).",
    "Error del banco a tu favor. Cobra $200.",
    "Honorarios del medico. Paga $50.",
    "De la venta de acciones obtienes $50.",
    "Salir de la carcel gratis. Puedes guardar esta carta o negociarla.",
    "Ve a la carcel. Ve directamente a la carcel. No pases por GO. No cobres $200.",
    "Vence el fondo vacacional. Recibe $100.",
    "Devolucion de impuestos. Cobra $20.",
    "Es tu cumpleanos. Cobra $10 de cada jugador.",
    "Vence tu seguro de vida. Cobra $100.",
    "Paga gastos de hospital por $100.",
    "Paga cuotas escolares de $50.",
    "Recibe $25 por asesoria.",
    "Te cobran por reparacion de calles: $40 por casa y $115 por hotel.",
    "Ganaste el segundo premio en un concurso de belleza. Cobra $10.",
    "Heredas $100.",
];

/// Chance card texts in catalog order
pub fn chance_texts(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &CHANCE_EN,
        Language::Es => &CHANCE_ES,
    }
}

/// Community Chest card texts in catalog order
pub fn community_texts(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &COMMUNITY_EN,
        Language::Es => &COMMUNITY_ES,
    }
}
