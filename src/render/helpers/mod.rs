//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod grid;
pub mod layer;
pub mod text;
pub mod text_metrics;

pub use colors::BLACK;
pub use compress::{compress_or_keep, compress_pdf};
pub use grid::GridGeometry;
pub use layer::LayerBuilder;
pub use text_metrics::{
    get_builtin_measurer, get_courier_measurer, get_helvetica_bold_measurer,
    get_helvetica_measurer, BuiltinFontMeasurer,
};
