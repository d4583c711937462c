use crate::cli::Args;
use crate::layout::ComposeOptions;
use crate::model::Language;

use super::defaults::*;

/// Runtime settings for sheet generation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // Content
    pub language: Language,
    pub include_action_decks: bool,

    // Duplex handling
    /// Reflect back pages horizontally for printers that need a manual flip
    pub mirror_backs: bool,

    // Decorations
    pub show_labels: bool,
    pub cut_lines: bool,
    pub compress: bool,

    // Page and card dimensions (in mm)
    pub page_width: f32,
    pub page_height: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub grid_gap: f32,

    // Typography (in points)
    pub label_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            include_action_decks: false,

            mirror_backs: true,

            show_labels: true,
            cut_lines: true,
            compress: true,

            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            grid_gap: GRID_GAP,

            label_font_size: LABEL_FONT_SIZE,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            language: args.language(),
            include_action_decks: args.include_action_decks,
            mirror_backs: args.mirror_backs(),
            show_labels: args.show_labels(),
            cut_lines: args.show_cut_lines(),
            compress: !args.no_compress,
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_action_decks(mut self, include: bool) -> Self {
        self.include_action_decks = include;
        self
    }

    pub fn with_mirror_backs(mut self, mirror: bool) -> Self {
        self.mirror_backs = mirror;
        self
    }

    /// Options consumed by the sheet composer
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            language: self.language,
            mirror_backs: self.mirror_backs,
        }
    }

    /// Total width of the card grid
    pub fn grid_width(&self, columns: usize) -> f32 {
        columns as f32 * self.card_width + columns.saturating_sub(1) as f32 * self.grid_gap
    }

    /// Total height of the card grid
    pub fn grid_height(&self, rows: usize) -> f32 {
        rows as f32 * self.card_height + rows.saturating_sub(1) as f32 * self.grid_gap
    }
}
