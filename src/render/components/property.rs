//! Title deed front
//!
//! Color band with the board number, the name on two balanced lines, an optional
//! price and a five-row rent table. Each row highlights its tier in a strip of
//! numbered level boxes.

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::model::{Label, PropertyCard, RENT_TIERS};
use crate::render::helpers::colors::{contrast_text, pdf_color, BLACK, PALE_GRAY};
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text::split_name_two_lines;

use super::{money, text_centered, text_right, CardFace};

/// Inset of the deed frame from the card edge
const FRAME_INSET: f32 = 2.0;

/// Inset of the band and table from the card edge
const CONTENT_INSET: f32 = 4.0;

const BAND_HEIGHT: f32 = 16.0;
const NUMBER_FONT_SIZE: f32 = 16.0;
const NAME_FONT_SIZE: f32 = 8.5;
const NAME_LINE_GAP: f32 = 4.0;
const PRICE_FONT_SIZE: f32 = 8.0;
const HEADER_FONT_SIZE: f32 = 6.0;
const AMOUNT_FONT_SIZE: f32 = 9.0;
const LEVEL_FONT_SIZE: f32 = 5.5;

/// Baseline of the rent table header, from the card bottom
const TABLE_HEADER_Y: f32 = 43.5;
/// Baseline of the first rent row
const FIRST_ROW_Y: f32 = 36.0;
const ROW_PITCH: f32 = 6.5;

const LEVEL_BOX: f32 = 3.2;
const LEVEL_PITCH: f32 = 4.0;

pub struct PropertyFrontRenderer<'a> {
    face: &'a CardFace,
}

impl<'a> PropertyFrontRenderer<'a> {
    pub fn new(face: &'a CardFace) -> Self {
        Self { face }
    }

    pub fn render(&self, layer: &mut LayerBuilder, card: &PropertyCard) {
        let w = self.face.width;
        let h = self.face.height;

        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(0.8);
        layer.add_rect(
            Mm(FRAME_INSET),
            Mm(FRAME_INSET),
            Mm(w - FRAME_INSET),
            Mm(h - FRAME_INSET),
            PaintMode::Stroke,
        );

        self.render_band(layer, card);
        self.render_name(layer, card);
        self.render_rent_table(layer, card);
    }

    fn render_band(&self, layer: &mut LayerBuilder, card: &PropertyCard) {
        let w = self.face.width;
        let top = self.face.height - CONTENT_INSET;
        let bottom = top - BAND_HEIGHT;

        layer.set_fill_color(pdf_color(card.color));
        layer.add_rect(
            Mm(CONTENT_INSET),
            Mm(bottom),
            Mm(w - CONTENT_INSET),
            Mm(top),
            PaintMode::Fill,
        );

        // Cap height of 16pt Helvetica-Bold is ~4mm
        let baseline = bottom + (BAND_HEIGHT - 4.0) / 2.0;
        layer.set_fill_color(Color::Rgb(contrast_text(card.color)));
        text_centered(
            layer,
            &card.board_number.to_string(),
            NUMBER_FONT_SIZE,
            self.face.center_x(),
            baseline,
            BuiltinFont::HelveticaBold,
        );
    }

    fn render_name(&self, layer: &mut LayerBuilder, card: &PropertyCard) {
        let (line1, line2) = split_name_two_lines(&card.name);
        let first_baseline = self.face.height - CONTENT_INSET - BAND_HEIGHT - 6.0;

        layer.set_fill_color(Color::Rgb(BLACK));
        for (i, line) in [line1, line2].iter().enumerate() {
            text_centered(
                layer,
                line,
                NAME_FONT_SIZE,
                self.face.center_x(),
                first_baseline - i as f32 * NAME_LINE_GAP,
                BuiltinFont::HelveticaBold,
            );
        }

        if let Some(price) = card.price {
            let text = format!("{} {}", self.face.language.text(Label::Price), money(price));
            text_centered(
                layer,
                &text,
                PRICE_FONT_SIZE,
                self.face.center_x(),
                first_baseline - 2.0 * NAME_LINE_GAP - 2.0,
                BuiltinFont::Helvetica,
            );
        }
    }

    fn render_rent_table(&self, layer: &mut LayerBuilder, card: &PropertyCard) {
        let left = CONTENT_INSET + 1.0;
        let right = self.face.width - CONTENT_INSET - 1.0;
        let language = self.face.language;

        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text(
            language.text(Label::RentLevel),
            HEADER_FONT_SIZE,
            Mm(left),
            Mm(TABLE_HEADER_Y),
            BuiltinFont::HelveticaBold,
        );
        text_right(
            layer,
            language.text(Label::RentAmount),
            HEADER_FONT_SIZE,
            right,
            TABLE_HEADER_Y,
            BuiltinFont::HelveticaBold,
        );

        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(0.5);
        layer.add_line(
            Mm(left),
            Mm(TABLE_HEADER_Y - 1.5),
            Mm(right),
            Mm(TABLE_HEADER_Y - 1.5),
        );

        for (tier, rent) in card.rents.iter().enumerate() {
            let baseline = FIRST_ROW_Y - tier as f32 * ROW_PITCH;
            self.render_level_boxes(layer, card, tier, left, baseline);

            layer.set_fill_color(Color::Rgb(BLACK));
            text_right(
                layer,
                &money(*rent),
                AMOUNT_FONT_SIZE,
                right,
                baseline,
                BuiltinFont::HelveticaBold,
            );
        }
    }

    /// Numbered boxes 1-5 with the box for `tier` filled in the deed color
    fn render_level_boxes(
        &self,
        layer: &mut LayerBuilder,
        card: &PropertyCard,
        tier: usize,
        left: f32,
        baseline: f32,
    ) {
        for level in 0..RENT_TIERS {
            let x = left + level as f32 * LEVEL_PITCH;
            let active = level == tier;

            if active {
                layer.set_fill_color(pdf_color(card.color));
            } else {
                layer.set_fill_color(Color::Rgb(PALE_GRAY));
            }
            layer.add_rect(
                Mm(x),
                Mm(baseline - 0.8),
                Mm(x + LEVEL_BOX),
                Mm(baseline - 0.8 + LEVEL_BOX),
                PaintMode::Fill,
            );

            let digit_color = if active {
                contrast_text(card.color)
            } else {
                BLACK
            };
            layer.set_fill_color(Color::Rgb(digit_color));
            text_centered(
                layer,
                &(level + 1).to_string(),
                LEVEL_FONT_SIZE,
                x + LEVEL_BOX / 2.0,
                baseline,
                BuiltinFont::HelveticaBold,
            );
        }
    }
}
