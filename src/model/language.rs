use std::fmt;

use crate::error::ConfigError;

/// Language used for every printed string on the cards and sheet labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    En,
    #[default]
    Es,
}

/// Language used when a requested one is not available
pub const FALLBACK_LANGUAGE: Language = Language::En;

/// Translatable strings used by the composer and the card renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    AppTitle,
    SheetFront,
    SheetBack,
    Price,
    RentLevel,
    RentAmount,
    Chance,
    CommunityChest,
}

impl Language {
    pub fn all() -> [Language; 2] {
        [Language::En, Language::Es]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a language code, rejecting unknown codes
    pub fn parse(code: &str) -> Result<Self, ConfigError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "es" | "spanish" | "espanol" => Ok(Language::Es),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }

    /// Parse a language code, falling back to English for unknown codes
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or_else(|e| {
            log::warn!("{}, falling back to '{}'", e, FALLBACK_LANGUAGE.code());
            FALLBACK_LANGUAGE
        })
    }

    /// Look up the localized text for a label
    pub fn text(&self, label: Label) -> &'static str {
        match self {
            Language::En => english(label),
            Language::Es => spanish(label),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::AppTitle => "Monopoly Card Generator",
        Label::SheetFront => "Front",
        Label::SheetBack => "Back",
        Label::Price => "PRICE",
        Label::RentLevel => "RENT LEVEL",
        Label::RentAmount => "RENT",
        Label::Chance => "Chance",
        Label::CommunityChest => "Community Chest",
    }
}

fn spanish(label: Label) -> &'static str {
    match label {
        Label::AppTitle => "Generador de Cartas Monopoly",
        Label::SheetFront => "Frente",
        Label::SheetBack => "Reverso",
        Label::Price => "PRECIO",
        Label::RentLevel => "NIVEL DE ALQUILER",
        Label::RentAmount => "ALQUILER",
        Label::Chance => "Suerte",
        Label::CommunityChest => "Caja de comunidad",
    }
}
