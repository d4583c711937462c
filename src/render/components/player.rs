//! Player reference card front, styled like a bank card

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::model::PlayerCard;
use crate::render::helpers::colors::{contrast_text, pdf_color, GOLD, NAVY, WHITE};
use crate::render::helpers::layer::LayerBuilder;

use super::token::draw_token_icon;
use super::{text_centered, CardFace};

const RAIL_WIDTH: f32 = 6.0;
const LOGO_FONT_SIZE: f32 = 11.0;
const NUMBER_FONT_SIZE: f32 = 7.5;
const TOKEN_FONT_SIZE: f32 = 8.0;
const TOKEN_RADIUS: f32 = 8.0;

pub struct PlayerFrontRenderer<'a> {
    face: &'a CardFace,
}

impl<'a> PlayerFrontRenderer<'a> {
    pub fn new(face: &'a CardFace) -> Self {
        Self { face }
    }

    pub fn render(&self, layer: &mut LayerBuilder, card: &PlayerCard) {
        let w = self.face.width;
        let h = self.face.height;
        // Content is centered on the area right of the rail
        let cx = RAIL_WIDTH + (w - RAIL_WIDTH) / 2.0;

        layer.set_fill_color(Color::Rgb(NAVY));
        layer.add_rect(Mm(0.0), Mm(0.0), Mm(w), Mm(h), PaintMode::Fill);

        layer.set_fill_color(Color::Rgb(GOLD));
        layer.add_rect(Mm(0.0), Mm(0.0), Mm(RAIL_WIDTH), Mm(h), PaintMode::Fill);

        layer.set_fill_color(Color::Rgb(WHITE));
        text_centered(
            layer,
            "MONOPOLY",
            LOGO_FONT_SIZE,
            cx,
            h - 12.0,
            BuiltinFont::HelveticaBold,
        );

        self.render_chip(layer, cx, h - 30.0);

        layer.set_fill_color(Color::Rgb(WHITE));
        text_centered(
            layer,
            &card.card_number,
            NUMBER_FONT_SIZE,
            cx,
            h - 44.0,
            BuiltinFont::Courier,
        );

        // Token marker and name
        let token_y = 22.0;
        layer.set_fill_color(pdf_color(card.token_color));
        layer.add_circle(Mm(cx), Mm(token_y), Mm(TOKEN_RADIUS), PaintMode::Fill);

        layer.set_fill_color(Color::Rgb(contrast_text(card.token_color)));
        draw_token_icon(layer, card.token_icon, cx, token_y, TOKEN_RADIUS * 0.7);

        layer.set_fill_color(pdf_color(card.token_color));
        text_centered(
            layer,
            &card.token_name,
            TOKEN_FONT_SIZE,
            cx,
            8.0,
            BuiltinFont::HelveticaBold,
        );
    }

    /// Contact chip: a gold plate with two contact lines
    fn render_chip(&self, layer: &mut LayerBuilder, cx: f32, cy: f32) {
        let (half_w, half_h) = (6.0, 4.5);

        layer.set_fill_color(Color::Rgb(GOLD));
        layer.add_rect(
            Mm(cx - half_w),
            Mm(cy - half_h),
            Mm(cx + half_w),
            Mm(cy + half_h),
            PaintMode::Fill,
        );

        layer.set_outline_color(Color::Rgb(NAVY));
        layer.set_outline_thickness(0.4);
        layer.add_line(Mm(cx - half_w), Mm(cy), Mm(cx + half_w), Mm(cy));
        layer.add_line(Mm(cx), Mm(cy - half_h), Mm(cx), Mm(cy + half_h));
    }
}
