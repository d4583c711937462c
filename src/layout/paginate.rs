use crate::error::LayoutError;
use crate::model::Card;

/// A contiguous run of deck cards printed on one sheet pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    /// 0-based page ordinal
    pub index: usize,
    pub cards: &'a [Card],
}

impl<'a> Page<'a> {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 1-based number used on sheet labels
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Split a deck into pages of at most `page_size` cards, preserving order
///
/// Every page except the last holds exactly `page_size` cards. An empty deck yields
/// no pages.
pub fn paginate(deck: &[Card], page_size: usize) -> Result<Vec<Page<'_>>, LayoutError> {
    if page_size == 0 {
        return Err(LayoutError::InvalidPageSize(page_size));
    }

    Ok(deck
        .chunks(page_size)
        .enumerate()
        .map(|(index, cards)| Page { index, cards })
        .collect())
}
