use crate::error::LayoutError;
use crate::model::{Card, Label, Language};

use super::paginate::{paginate, Page};
use super::slots::{Side, SlotMap, SLOTS_PER_PAGE};

/// Produces the visual element for a card face
///
/// The composer only decides positions; what a face looks like is up to the
/// implementation. Every card kind and the blank placeholder must be renderable.
pub trait CardRenderer {
    type Element;

    fn front(&self, card: &Card) -> Self::Element;

    fn back(&self, card: &Card) -> Self::Element;

    fn blank(&self) -> Self::Element;
}

/// Options that affect sheet composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    pub language: Language,
    pub mirror_backs: bool,
}

/// One printed side of a sheet: a label and nine rendered slots in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet<E> {
    pub label: String,
    pub side: Side,
    /// 0-based ordinal of the page this sheet belongs to
    pub page_index: usize,
    pub slots: Vec<E>,
}

/// Label printed on a sheet, e.g. `Sheet 2 - Back`
pub fn sheet_label(page_number: usize, side: Side, language: Language) -> String {
    let side_text = match side {
        Side::Front => language.text(Label::SheetFront),
        Side::Back => language.text(Label::SheetBack),
    };
    format!("Sheet {} - {}", page_number, side_text)
}

/// Compose the front and back sheet of every page, in page order
pub fn compose_sheets<R: CardRenderer>(
    pages: &[Page<'_>],
    options: ComposeOptions,
    renderer: &R,
) -> Result<Vec<Sheet<R::Element>>, LayoutError> {
    let mut sheets = Vec::with_capacity(pages.len() * 2);

    for page in pages {
        for side in [Side::Front, Side::Back] {
            let map = SlotMap::for_side(page, side, options.mirror_backs)?;
            log::debug!(
                "Page {} {:?}: {}",
                page.number(),
                side,
                describe_slots(&map)
            );
            sheets.push(render_sheet(page, side, &map, options.language, renderer));
        }
    }

    Ok(sheets)
}

/// Paginate a deck into grid-sized pages and compose its sheets
pub fn compose_deck<R: CardRenderer>(
    deck: &[Card],
    options: ComposeOptions,
    renderer: &R,
) -> Result<Vec<Sheet<R::Element>>, LayoutError> {
    let pages = paginate(deck, SLOTS_PER_PAGE)?;
    log::info!("Laying out {} cards on {} pages", deck.len(), pages.len());
    compose_sheets(&pages, options, renderer)
}

fn render_sheet<R: CardRenderer>(
    page: &Page<'_>,
    side: Side,
    map: &SlotMap<'_>,
    language: Language,
    renderer: &R,
) -> Sheet<R::Element> {
    let slots = map
        .slots()
        .iter()
        .map(|slot| match (slot, side) {
            (Some(card), Side::Front) => renderer.front(card),
            (Some(card), Side::Back) => renderer.back(card),
            (None, _) => renderer.blank(),
        })
        .collect();

    Sheet {
        label: sheet_label(page.number(), side, language),
        side,
        page_index: page.index,
        slots,
    }
}

fn describe_slots(map: &SlotMap<'_>) -> String {
    map.slots()
        .iter()
        .map(|slot| slot.map_or_else(|| "--".to_string(), |c| c.short_id()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assemble_deck;

    /// Renders faces as short text tags so tests can inspect placement
    struct TagRenderer;

    impl CardRenderer for TagRenderer {
        type Element = String;

        fn front(&self, card: &Card) -> String {
            format!("F:{}", card.short_id())
        }

        fn back(&self, card: &Card) -> String {
            format!("B:{}", card.short_id())
        }

        fn blank(&self) -> String {
            "blank".to_string()
        }
    }

    fn options(mirror_backs: bool) -> ComposeOptions {
        ComposeOptions {
            language: Language::En,
            mirror_backs,
        }
    }

    #[test]
    fn test_sheets_alternate_front_and_back() {
        let deck = assemble_deck(Language::En, false);
        let sheets = compose_deck(&deck, options(true), &TagRenderer).unwrap();

        // 30 cards -> 4 pages -> 8 sheets
        assert_eq!(sheets.len(), 8);
        for (i, sheet) in sheets.iter().enumerate() {
            assert_eq!(sheet.page_index, i / 2);
            let expected_side = if i % 2 == 0 { Side::Front } else { Side::Back };
            assert_eq!(sheet.side, expected_side);
            assert_eq!(sheet.slots.len(), SLOTS_PER_PAGE);
        }
    }

    #[test]
    fn test_labels() {
        let deck = assemble_deck(Language::Es, false);
        let sheets = compose_deck(
            &deck,
            ComposeOptions {
                language: Language::Es,
                mirror_backs: true,
            },
            &TagRenderer,
        )
        .unwrap();
        assert_eq!(sheets[0].label, "Sheet 1 - Frente");
        assert_eq!(sheets[3].label, "Sheet 2 - Reverso");
        assert_eq!(sheet_label(3, Side::Back, Language::En), "Sheet 3 - Back");
    }

    #[test]
    fn test_last_page_blanks_and_mirror() {
        let deck = assemble_deck(Language::En, false);
        let sheets = compose_deck(&deck, options(true), &TagRenderer).unwrap();

        // Last page holds cards 27..30: the last three player cards
        let front = &sheets[6];
        let back = &sheets[7];
        assert_eq!(&front.slots[..3], &["F:PL6", "F:PL7", "F:PL8"]);
        assert!(front.slots[3..].iter().all(|s| s == "blank"));
        assert_eq!(&back.slots[..3], &["B:PL8", "B:PL7", "B:PL6"]);
        assert!(back.slots[3..].iter().all(|s| s == "blank"));
    }

    #[test]
    fn test_unmirrored_backs_keep_front_positions() {
        let deck = assemble_deck(Language::En, false);
        let sheets = compose_deck(&deck, options(false), &TagRenderer).unwrap();

        for pair in sheets.chunks(2) {
            let fronts: Vec<String> = pair[0].slots.iter().map(|s| s.replace("F:", "")).collect();
            let backs: Vec<String> = pair[1].slots.iter().map(|s| s.replace("B:", "")).collect();
            assert_eq!(fronts, backs);
        }
    }

    #[test]
    fn test_empty_deck_has_no_sheets() {
        let sheets = compose_deck(&[], options(true), &TagRenderer).unwrap();
        assert!(sheets.is_empty());
    }

    #[test]
    fn test_composition_is_deterministic() {
        let deck = assemble_deck(Language::En, true);
        let first = compose_deck(&deck, options(true), &TagRenderer).unwrap();
        let second = compose_deck(&deck, options(true), &TagRenderer).unwrap();
        assert_eq!(first, second);
    }
}
