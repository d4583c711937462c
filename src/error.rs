use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    #[error("Page {page} holds {len} cards but the grid has only {capacity} slots")]
    PageOverflow {
        page: usize,
        len: usize,
        capacity: usize,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("No cards to lay out")]
    EmptyDeck,

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
}
