use crate::model::HexColor;
use printpdf::{Color, Rgb};

/// Convert a catalog color to a PDF fill/stroke color
pub fn pdf_color(color: HexColor) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Black or white, whichever reads better on `background`
pub fn contrast_text(background: HexColor) -> Rgb {
    if background.luminance() > 0.6 {
        BLACK
    } else {
        WHITE
    }
}

/// Standard colors
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

pub const WHITE: Rgb = Rgb {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    icc_profile: None,
};

pub const GRAY: Rgb = Rgb {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    icc_profile: None,
};

/// Cut outlines and blank slots
pub const LIGHT_GRAY: Rgb = Rgb {
    r: 0.8,
    g: 0.8,
    b: 0.8,
    icc_profile: None,
};

/// Inactive rent level boxes
pub const PALE_GRAY: Rgb = Rgb {
    r: 0.93,
    g: 0.93,
    b: 0.93,
    icc_profile: None,
};

/// Logo strip on card backs
pub const MONOPOLY_RED: Rgb = Rgb {
    r: 0.82,
    g: 0.14,
    b: 0.16,
    icc_profile: None,
};

pub const CHANCE_ORANGE: HexColor = HexColor::from_rgb(0xf2a12f);

pub const CHEST_BLUE: HexColor = HexColor::from_rgb(0x4f8fd0);

/// Player card background
pub const NAVY: Rgb = Rgb {
    r: 0.11,
    g: 0.17,
    b: 0.31,
    icc_profile: None,
};

/// Player card rail and chip
pub const GOLD: Rgb = Rgb {
    r: 0.83,
    g: 0.69,
    b: 0.22,
    icc_profile: None,
};
