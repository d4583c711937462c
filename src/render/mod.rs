//! PDF rendering modules

pub mod cards;
pub mod components;
pub mod helpers;
pub mod layouts;

// Re-export commonly used items for convenience
pub use cards::PdfCardRenderer;
pub use helpers::{get_helvetica_measurer, BuiltinFontMeasurer, LayerBuilder};
pub use layouts::CardSheetsRenderer;
