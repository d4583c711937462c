//! Card grid geometry on a sheet
//!
//! PDF coordinates have their origin at the bottom-left of the page. Slot 0 is the
//! top-left card, slots run row-major.

use crate::config::defaults::LABEL_OFFSET;
use crate::config::Settings;
use crate::layout::{slot_col, slot_row, GRID_COLUMNS, GRID_ROWS};

/// Positions of the card slots, with the grid centered on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub card_width: f32,
    pub card_height: f32,
    pub gap: f32,
    /// Left edge of the first column
    pub start_x: f32,
    /// Top edge of the first row
    pub top_y: f32,
    pub width: f32,
    pub height: f32,
}

impl GridGeometry {
    pub fn new(settings: &Settings) -> Self {
        let width = settings.grid_width(GRID_COLUMNS);
        let height = settings.grid_height(GRID_ROWS);

        Self {
            card_width: settings.card_width,
            card_height: settings.card_height,
            gap: settings.grid_gap,
            start_x: (settings.page_width - width) / 2.0,
            top_y: settings.page_height - (settings.page_height - height) / 2.0,
            width,
            height,
        }
    }

    /// Bottom-left corner of the card in `slot`
    pub fn slot_origin(&self, slot: usize) -> (f32, f32) {
        let col = slot_col(slot) as f32;
        let row = slot_row(slot) as f32;

        let x = self.start_x + col * (self.card_width + self.gap);
        let y = self.top_y - row * (self.card_height + self.gap) - self.card_height;
        (x, y)
    }

    pub fn bottom_y(&self) -> f32 {
        self.top_y - self.height
    }

    pub fn right_x(&self) -> f32 {
        self.start_x + self.width
    }

    /// Baseline of the sheet label, just above the grid
    pub fn label_baseline(&self) -> f32 {
        self.top_y + LABEL_OFFSET
    }

    /// X positions of the vertical cut lines: both edges of every column
    pub fn cut_xs(&self) -> Vec<f32> {
        (0..GRID_COLUMNS)
            .flat_map(|col| {
                let left = self.start_x + col as f32 * (self.card_width + self.gap);
                [left, left + self.card_width]
            })
            .collect()
    }

    /// Y positions of the horizontal cut lines: both edges of every row
    pub fn cut_ys(&self) -> Vec<f32> {
        (0..GRID_ROWS)
            .flat_map(|row| {
                let top = self.top_y - row as f32 * (self.card_height + self.gap);
                [top, top - self.card_height]
            })
            .collect()
    }
}
