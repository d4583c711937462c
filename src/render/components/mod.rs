//! Card face renderers
//!
//! Every renderer draws in card-local coordinates: origin at the bottom-left
//! corner of the card, y growing upwards, units in mm.

pub mod action;
pub mod back;
pub mod blank;
pub mod player;
pub mod property;
pub mod token;

pub use action::ActionFrontRenderer;
pub use back::{BackDesign, BackRenderer};
pub use blank::BlankRenderer;
pub use player::PlayerFrontRenderer;
pub use property::PropertyFrontRenderer;
pub use token::draw_token_icon;

use printpdf::{BuiltinFont, Mm};

use crate::model::Language;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::get_builtin_measurer;

/// Card dimensions and text language shared by all face renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFace {
    pub width: f32,
    pub height: f32,
    pub language: Language,
}

impl CardFace {
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// Draw text horizontally centered on `center_x`
pub(crate) fn text_centered(
    layer: &mut LayerBuilder,
    text: &str,
    font_size: f32,
    center_x: f32,
    y: f32,
    font: BuiltinFont,
) {
    let width = get_builtin_measurer(font).measure_width_mm(text, font_size);
    layer.use_text(text, font_size, Mm(center_x - width / 2.0), Mm(y), font);
}

/// Draw text ending at `right_x`
pub(crate) fn text_right(
    layer: &mut LayerBuilder,
    text: &str,
    font_size: f32,
    right_x: f32,
    y: f32,
    font: BuiltinFont,
) {
    let width = get_builtin_measurer(font).measure_width_mm(text, font_size);
    layer.use_text(text, font_size, Mm(right_x - width), Mm(y), font);
}

/// Format an amount the way the printed cards show it
pub fn money(value: u32) -> String {
    format!("${}", value)
}
