//! Slot assignment for the 3x3 sheet grid
//!
//! Slots are numbered row-major from the top-left corner. Fronts place the n-th card
//! of a page in slot n. Backs either reuse that slot (automatic duplex) or reflect it
//! within its row, so that flipping the sheet along its vertical axis lines each back
//! up with its front.

use crate::error::LayoutError;
use crate::model::Card;

use super::paginate::Page;

pub const GRID_COLUMNS: usize = 3;
pub const GRID_ROWS: usize = 3;
pub const SLOTS_PER_PAGE: usize = GRID_COLUMNS * GRID_ROWS;

/// Grid row of a slot
pub fn slot_row(slot: usize) -> usize {
    slot / GRID_COLUMNS
}

/// Grid column of a slot
pub fn slot_col(slot: usize) -> usize {
    slot % GRID_COLUMNS
}

/// Reflect a slot horizontally within its row (0<->2, 3<->5, 6<->8)
pub fn mirror_slot(slot: usize) -> usize {
    slot_row(slot) * GRID_COLUMNS + (GRID_COLUMNS - 1 - slot_col(slot))
}

/// Which face of the sheet a slot map describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

/// Cards assigned to each slot of one sheet side; `None` is a blank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotMap<'a> {
    slots: [Option<&'a Card>; SLOTS_PER_PAGE],
}

impl<'a> SlotMap<'a> {
    /// Front assignment: the card at position `i` of the page goes to slot `i`
    pub fn front(page: &Page<'a>) -> Result<Self, LayoutError> {
        Self::build(page, |i| i)
    }

    /// Back assignment, mirrored for manual flipping or identical to the front
    pub fn back(page: &Page<'a>, mirror: bool) -> Result<Self, LayoutError> {
        if mirror {
            Self::build(page, mirror_slot)
        } else {
            Self::build(page, |i| i)
        }
    }

    /// Assignment for either side
    pub fn for_side(page: &Page<'a>, side: Side, mirror: bool) -> Result<Self, LayoutError> {
        match side {
            Side::Front => Self::front(page),
            Side::Back => Self::back(page, mirror),
        }
    }

    fn build(page: &Page<'a>, slot_for: impl Fn(usize) -> usize) -> Result<Self, LayoutError> {
        if page.len() > SLOTS_PER_PAGE {
            return Err(LayoutError::PageOverflow {
                page: page.number(),
                len: page.len(),
                capacity: SLOTS_PER_PAGE,
            });
        }

        let mut slots = [None; SLOTS_PER_PAGE];
        for (position, card) in page.cards.iter().enumerate() {
            slots[slot_for(position)] = Some(card);
        }
        Ok(Self { slots })
    }

    /// Card in a slot, or `None` for a blank (also for out-of-range slots)
    pub fn get(&self, slot: usize) -> Option<&'a Card> {
        self.slots.get(slot).copied().flatten()
    }

    /// All slots in row-major order
    pub fn slots(&self) -> &[Option<&'a Card>; SLOTS_PER_PAGE] {
        &self.slots
    }

    /// Indices of slots holding a card
    pub fn filled(&self) -> Vec<usize> {
        (0..SLOTS_PER_PAGE).filter(|&s| self.slots[s].is_some()).collect()
    }

    /// Number of blank slots
    pub fn blank_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paginate::paginate;
    use crate::model::{assemble_deck, Language};
    use std::collections::BTreeSet;

    fn cards(len: usize) -> Vec<Card> {
        assemble_deck(Language::En, true).into_iter().take(len).collect()
    }

    fn page(cards: &[Card]) -> Page<'_> {
        Page { index: 0, cards }
    }

    #[test]
    fn test_mirror_is_an_involution() {
        for s in 0..SLOTS_PER_PAGE {
            assert_eq!(mirror_slot(mirror_slot(s)), s);
            assert_eq!(slot_row(mirror_slot(s)), slot_row(s));
        }
    }

    #[test]
    fn test_mirror_fixed_points_are_middle_column() {
        let fixed: Vec<usize> = (0..SLOTS_PER_PAGE).filter(|&s| mirror_slot(s) == s).collect();
        assert_eq!(fixed, vec![1, 4, 7]);
    }

    #[test]
    fn test_mirror_swaps_outer_columns() {
        let pairs: Vec<(usize, usize)> = [0, 3, 6].iter().map(|&s| (s, mirror_slot(s))).collect();
        assert_eq!(pairs, vec![(0, 2), (3, 5), (6, 8)]);
    }

    #[test]
    fn test_slot_geometry() {
        assert_eq!((slot_row(0), slot_col(0)), (0, 0));
        assert_eq!((slot_row(5), slot_col(5)), (1, 2));
        assert_eq!((slot_row(7), slot_col(7)), (2, 1));
    }

    #[test]
    fn test_full_page_mirrored_back() {
        let deck = cards(9);
        let page = page(&deck);
        let front = SlotMap::front(&page).unwrap();
        let back = SlotMap::back(&page, true).unwrap();

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(front.get(i), Some(card));
        }

        let expected = [2, 1, 0, 5, 4, 3, 8, 7, 6];
        for (slot, &front_slot) in expected.iter().enumerate() {
            assert_eq!(back.get(slot), front.get(front_slot), "back slot {}", slot);
        }
        assert_eq!(back.blank_count(), 0);
    }

    #[test]
    fn test_partial_page_slot_coverage() {
        let deck = cards(9);
        for k in 1..=SLOTS_PER_PAGE {
            let page = page(&deck[..k]);
            let back = SlotMap::back(&page, true).unwrap();

            let filled: BTreeSet<usize> = back.filled().into_iter().collect();
            let expected: BTreeSet<usize> = (0..k).map(mirror_slot).collect();
            assert_eq!(filled, expected);
            assert_eq!(filled.len(), k);
            assert_eq!(back.blank_count(), SLOTS_PER_PAGE - k);

            let front = SlotMap::front(&page).unwrap();
            assert_eq!(front.filled(), (0..k).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_unmirrored_back_matches_front() {
        let deck = cards(7);
        let page = page(&deck);
        let front = SlotMap::front(&page).unwrap();
        let back = SlotMap::back(&page, false).unwrap();
        assert_eq!(front, back);
    }

    #[test]
    fn test_single_card_last_page() {
        let deck = cards(10);
        let pages = paginate(&deck, SLOTS_PER_PAGE).unwrap();
        let front = SlotMap::front(&pages[1]).unwrap();

        assert_eq!(front.get(0), Some(&deck[9]));
        assert!((1..SLOTS_PER_PAGE).all(|s| front.get(s).is_none()));

        let back = SlotMap::back(&pages[1], true).unwrap();
        assert_eq!(back.get(2), Some(&deck[9]));
        assert_eq!(back.filled(), vec![2]);
    }

    #[test]
    fn test_oversized_page_is_rejected() {
        let deck = cards(10);
        let page = page(&deck);
        assert_eq!(
            SlotMap::front(&page),
            Err(LayoutError::PageOverflow {
                page: 1,
                len: 10,
                capacity: SLOTS_PER_PAGE,
            })
        );
    }
}
