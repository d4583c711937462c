use std::fs;
use std::path::PathBuf;
use std::process::Command;

use monopoly_cards::config::Settings;
use monopoly_cards::layout::{
    compose_deck, mirror_slot, paginate, CardRenderer, Side, SlotMap, SLOTS_PER_PAGE,
};
use monopoly_cards::model::{assemble_deck, Card, CardKind, Language};
use monopoly_cards::{render_deck, write_deck, RenderError};

/// Tags every slot with the card's short id
struct IdRenderer;

impl CardRenderer for IdRenderer {
    type Element = Option<String>;

    fn front(&self, card: &Card) -> Option<String> {
        Some(card.short_id())
    }

    fn back(&self, card: &Card) -> Option<String> {
        Some(card.short_id())
    }

    fn blank(&self) -> Option<String> {
        None
    }
}

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("monopoly-cards");
    fs::create_dir_all(&dir).expect("Failed to create output directory");
    dir
}

/// Number of pages in a serialized PDF
fn count_pages(pdf: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(pdf).expect("Failed to parse generated PDF");
    doc.get_pages().len()
}

#[test]
fn test_default_deck_has_no_action_cards() {
    for language in Language::all() {
        let deck = assemble_deck(language, false);
        assert_eq!(deck.len(), 30);
        assert!(deck.iter().all(|c| c.kind() != CardKind::Action));
    }
}

#[test]
fn test_every_card_lands_on_exactly_one_front_and_back() {
    let deck = assemble_deck(Language::Es, true);
    let pages = paginate(&deck, SLOTS_PER_PAGE).unwrap();

    let mut fronts = 0;
    let mut backs = 0;
    for page in &pages {
        let front = SlotMap::front(page).unwrap();
        let back = SlotMap::back(page, true).unwrap();
        fronts += front.filled().len();
        backs += back.filled().len();

        for slot in front.filled() {
            let card = front.get(slot).unwrap();
            assert_eq!(back.get(mirror_slot(slot)), Some(card));
        }
    }

    assert_eq!(fronts, deck.len());
    assert_eq!(backs, deck.len());
}

#[test]
fn test_ten_cards_spill_onto_second_page() {
    let deck: Vec<Card> = assemble_deck(Language::En, false).into_iter().take(10).collect();
    let sheets = compose_deck(
        &deck,
        Settings::default().compose_options(),
        &IdRenderer,
    )
    .unwrap();

    assert_eq!(sheets.len(), 4);
    let second_front = &sheets[2];
    assert_eq!(second_front.side, Side::Front);
    assert_eq!(second_front.slots[0], Some(deck[9].short_id()));
    assert!(second_front.slots[1..].iter().all(|s| s.is_none()));

    // Mirrored back of the last page puts the single card top-right
    let second_back = &sheets[3];
    assert_eq!(second_back.slots[2], Some(deck[9].short_id()));
    assert_eq!(second_back.slots.iter().flatten().count(), 1);
}

#[test]
fn test_full_page_back_is_row_reversed() {
    let deck: Vec<Card> = assemble_deck(Language::En, false).into_iter().take(9).collect();
    let sheets = compose_deck(&deck, Settings::default().compose_options(), &IdRenderer).unwrap();

    let ids: Vec<String> = deck.iter().map(|c| c.short_id()).collect();
    let expected: Vec<Option<String>> = [2, 1, 0, 5, 4, 3, 8, 7, 6]
        .iter()
        .map(|&i| Some(ids[i].clone()))
        .collect();
    assert_eq!(sheets[1].slots, expected);
}

#[test]
fn test_layout_is_deterministic() {
    let settings = Settings::default().with_action_decks(true);
    let first = compose_deck(
        &assemble_deck(settings.language, true),
        settings.compose_options(),
        &IdRenderer,
    )
    .unwrap();
    let second = compose_deck(
        &assemble_deck(settings.language, true),
        settings.compose_options(),
        &IdRenderer,
    )
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_deck_page_counts() {
    // 30 cards -> 4 deck pages -> 8 PDF pages
    let settings = Settings::default().with_language(Language::En);
    let pdf = render_deck(&settings).expect("Failed to render deck");
    assert!(pdf.starts_with(b"%PDF"));
    assert_eq!(count_pages(&pdf), 8);

    // 62 cards -> 7 deck pages -> 14 PDF pages
    let settings = settings.with_action_decks(true);
    let pdf = render_deck(&settings).expect("Failed to render deck");
    assert_eq!(count_pages(&pdf), 14);
}

#[test]
fn test_uncompressed_output_is_larger() {
    let compressed = render_deck(&Settings::default()).unwrap();
    let plain = render_deck(&Settings {
        compress: false,
        ..Settings::default()
    })
    .unwrap();
    assert!(plain.starts_with(b"%PDF"));
    assert!(plain.len() > compressed.len());
}

#[test]
fn test_write_deck_reports_io_errors() {
    let missing = output_dir().join("no-such-dir").join("cards.pdf");
    let result = write_deck(&Settings::default(), &missing);
    assert!(matches!(result, Err(RenderError::Io(_))));
}

#[test]
fn test_cli_writes_pdf() {
    let output = output_dir().join("cli-cards.pdf");
    let _ = fs::remove_file(&output);

    let status = Command::new(env!("CARGO_BIN_EXE_monopoly-cards"))
        .args([
            "--language",
            "en",
            "--include-action-decks",
            "-o",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("Failed to run monopoly-cards");
    assert!(status.success());

    let bytes = fs::read(&output).expect("PDF not created");
    assert_eq!(count_pages(&bytes), 14);
}

#[test]
fn test_cli_unknown_language_falls_back() {
    let output = output_dir().join("cli-fallback.pdf");

    let status = Command::new(env!("CARGO_BIN_EXE_monopoly-cards"))
        .args(["--language", "xx", "-o", output.to_str().unwrap()])
        .status()
        .expect("Failed to run monopoly-cards");
    assert!(status.success());
    assert!(output.exists());
}

#[test]
fn test_cli_matches_library_output() {
    let output = output_dir().join("cli-default.pdf");

    let status = Command::new(env!("CARGO_BIN_EXE_monopoly-cards"))
        .args(["-o", output.to_str().unwrap()])
        .status()
        .expect("Failed to run monopoly-cards");
    assert!(status.success());

    let from_cli = fs::read(&output).expect("PDF not created");
    let from_library = render_deck(&Settings::default()).unwrap();
    assert_eq!(count_pages(&from_cli), count_pages(&from_library));
}
