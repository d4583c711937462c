//! Debug tool to visualize slot assignment as text
//! Run with: cargo run --bin layout_debug [-- --all] [-- --no-mirror]

use monopoly_cards::config::Settings;
use monopoly_cards::layout::{compose_deck, CardRenderer, GRID_COLUMNS};
use monopoly_cards::model::{assemble_deck, Card};

const CELL_WIDTH: usize = 26;

/// Renders each slot as a short text tag
struct TextRenderer;

impl CardRenderer for TextRenderer {
    type Element = String;

    fn front(&self, card: &Card) -> String {
        card.to_string()
    }

    fn back(&self, card: &Card) -> String {
        format!("({})", card.short_id())
    }

    fn blank(&self) -> String {
        "-".to_string()
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn main() {
    let flags: Vec<String> = std::env::args().skip(1).collect();
    let include_actions = flags.iter().any(|f| f == "--all");
    let mirror = !flags.iter().any(|f| f == "--no-mirror");

    let settings = Settings::default()
        .with_action_decks(include_actions)
        .with_mirror_backs(mirror);
    let deck = assemble_deck(settings.language, settings.include_action_decks);

    let sheets = match compose_deck(&deck, settings.compose_options(), &TextRenderer) {
        Ok(sheets) => sheets,
        Err(e) => {
            eprintln!("Layout failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "{} cards, {} sheets (mirror backs: {})",
        deck.len(),
        sheets.len(),
        settings.mirror_backs
    );

    for sheet in &sheets {
        println!();
        println!("== {} ==", sheet.label);
        for row in sheet.slots.chunks(GRID_COLUMNS) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("{:<width$}", truncate(cell, CELL_WIDTH), width = CELL_WIDTH))
                .collect();
            println!("| {} |", line.join(" | "));
        }
    }
}
