pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

pub use config::Settings;
pub use error::{ConfigError, LayoutError, RenderError};
pub use layout::{compose_deck, CardRenderer, Sheet, Side, SlotMap};
pub use model::{assemble_deck, Card, Language};
pub use render::CardSheetsRenderer;

use std::path::Path;

/// High-level API for rendering the card sheets to PDF.
///
/// Assembles the deck for the configured language (property deeds, player
/// cards and, when enabled, the Chance and Community Chest decks), lays it out
/// nine cards per page and returns the PDF bytes. Each deck page becomes two
/// PDF pages: fronts then backs.
///
/// # Example
///
/// ```no_run
/// use monopoly_cards::{render_deck, Language, Settings};
///
/// let settings = Settings::default()
///     .with_language(Language::En)
///     .with_action_decks(true);
///
/// let pdf_bytes = render_deck(&settings).unwrap();
/// std::fs::write("cards.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_deck(settings: &Settings) -> Result<Vec<u8>, RenderError> {
    let deck = assemble_deck(settings.language, settings.include_action_decks);
    log::info!(
        "Assembled {} cards ({})",
        deck.len(),
        settings.language.code()
    );

    let renderer = CardSheetsRenderer::new(settings.clone());
    renderer.render(&deck)
}

/// Render the card sheets and write them to `path`
pub fn write_deck(settings: &Settings, path: &Path) -> Result<(), RenderError> {
    let bytes = render_deck(settings)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
