/// A4 page width in mm
pub const A4_WIDTH: f32 = 210.0;

/// A4 page height in mm
pub const A4_HEIGHT: f32 = 297.0;

/// Card width in mm (NFC card standard)
pub const CARD_WIDTH: f32 = 54.0;

/// Card height in mm (NFC card standard)
pub const CARD_HEIGHT: f32 = 85.5;

/// Gap between neighbouring cards in mm
pub const GRID_GAP: f32 = 4.0;

/// Sheet label font size in points
pub const LABEL_FONT_SIZE: f32 = 9.0;

/// Distance from the top edge of the grid to the sheet label baseline in mm
pub const LABEL_OFFSET: f32 = 5.0;

/// Cut outline thickness in points
pub const CUT_LINE_THICKNESS: f32 = 0.3;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "monopoly-cards.pdf";
