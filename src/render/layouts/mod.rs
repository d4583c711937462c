//! Document layout renderers

pub mod card_sheets;

pub use card_sheets::CardSheetsRenderer;
