//! Pagination and slot assignment for duplex card sheets

pub mod paginate;
pub mod sheet;
pub mod slots;

pub use paginate::{paginate, Page};
pub use sheet::{compose_deck, compose_sheets, sheet_label, CardRenderer, ComposeOptions, Sheet};
pub use slots::{
    mirror_slot, slot_col, slot_row, Side, SlotMap, GRID_COLUMNS, GRID_ROWS, SLOTS_PER_PAGE,
};
