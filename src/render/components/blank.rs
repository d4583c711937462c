//! Empty grid slot

use printpdf::{Color, Mm, PaintMode};

use crate::render::helpers::colors::LIGHT_GRAY;
use crate::render::helpers::layer::LayerBuilder;

use super::CardFace;

const INSET: f32 = 2.0;

/// Draws a faint outline where no card is printed, so the grid stays readable
pub struct BlankRenderer<'a> {
    face: &'a CardFace,
}

impl<'a> BlankRenderer<'a> {
    pub fn new(face: &'a CardFace) -> Self {
        Self { face }
    }

    pub fn render(&self, layer: &mut LayerBuilder) {
        layer.set_outline_color(Color::Rgb(LIGHT_GRAY));
        layer.set_outline_thickness(0.3);
        layer.add_rect(
            Mm(INSET),
            Mm(INSET),
            Mm(self.face.width - INSET),
            Mm(self.face.height - INSET),
            PaintMode::Stroke,
        );
    }
}
