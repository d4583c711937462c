//! Chance and Community Chest fronts

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::model::{ActionCard, ActionDeck, HexColor, Label};
use crate::render::helpers::colors::{
    contrast_text, pdf_color, BLACK, CHANCE_ORANGE, CHEST_BLUE, GRAY,
};
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text::wrap_text;
use crate::render::helpers::text_metrics::get_helvetica_measurer;

use super::{text_centered, CardFace};

const FRAME_INSET: f32 = 2.0;
const HEADER_HEIGHT: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 10.0;
const GLYPH_FONT_SIZE: f32 = 40.0;
const BODY_FONT_SIZE: f32 = 7.5;
const BODY_LEADING: f32 = 1.3;
const FOOTER_FONT_SIZE: f32 = 5.5;

/// Horizontal padding of the wrapped card text
const TEXT_PADDING: f32 = 5.0;

/// Baseline of the first text line, from the card bottom
const TEXT_TOP: f32 = 36.0;

/// Accent color of an action deck
pub fn deck_color(deck: ActionDeck) -> HexColor {
    match deck {
        ActionDeck::Chance => CHANCE_ORANGE,
        ActionDeck::CommunityChest => CHEST_BLUE,
    }
}

/// Large glyph printed in the middle of the card
pub fn deck_glyph(deck: ActionDeck) -> &'static str {
    match deck {
        ActionDeck::Chance => "?",
        ActionDeck::CommunityChest => "$",
    }
}

pub struct ActionFrontRenderer<'a> {
    face: &'a CardFace,
}

impl<'a> ActionFrontRenderer<'a> {
    pub fn new(face: &'a CardFace) -> Self {
        Self { face }
    }

    pub fn render(&self, layer: &mut LayerBuilder, card: &ActionCard) {
        let w = self.face.width;
        let h = self.face.height;
        let cx = self.face.center_x();
        let color = deck_color(card.deck);

        layer.set_outline_color(pdf_color(color));
        layer.set_outline_thickness(1.5);
        layer.add_rect(
            Mm(FRAME_INSET),
            Mm(FRAME_INSET),
            Mm(w - FRAME_INSET),
            Mm(h - FRAME_INSET),
            PaintMode::Stroke,
        );

        // Header band with the deck title
        let header_top = h - FRAME_INSET - 2.0;
        let header_bottom = header_top - HEADER_HEIGHT;
        layer.set_fill_color(pdf_color(color));
        layer.add_rect(
            Mm(FRAME_INSET + 2.0),
            Mm(header_bottom),
            Mm(w - FRAME_INSET - 2.0),
            Mm(header_top),
            PaintMode::Fill,
        );

        let title = match card.deck {
            ActionDeck::Chance => self.face.language.text(Label::Chance),
            ActionDeck::CommunityChest => self.face.language.text(Label::CommunityChest),
        };
        layer.set_fill_color(Color::Rgb(contrast_text(color)));
        text_centered(
            layer,
            &title.to_uppercase(),
            TITLE_FONT_SIZE,
            cx,
            header_bottom + 4.3,
            BuiltinFont::HelveticaBold,
        );

        layer.set_fill_color(pdf_color(color));
        text_centered(
            layer,
            deck_glyph(card.deck),
            GLYPH_FONT_SIZE,
            cx,
            header_bottom - 18.0,
            BuiltinFont::HelveticaBold,
        );

        self.render_text(layer, &card.text);

        layer.set_fill_color(Color::Rgb(GRAY));
        text_centered(
            layer,
            &card.name,
            FOOTER_FONT_SIZE,
            cx,
            FRAME_INSET + 2.5,
            BuiltinFont::Helvetica,
        );
    }

    fn render_text(&self, layer: &mut LayerBuilder, text: &str) {
        let measurer = get_helvetica_measurer();
        let max_width = self.face.width - 2.0 * TEXT_PADDING;
        let line_height = measurer.line_height_mm(BODY_FONT_SIZE, BODY_LEADING);

        layer.set_fill_color(Color::Rgb(BLACK));
        for (i, line) in wrap_text(text, max_width, BODY_FONT_SIZE, measurer)
            .iter()
            .enumerate()
        {
            text_centered(
                layer,
                line,
                BODY_FONT_SIZE,
                self.face.center_x(),
                TEXT_TOP - i as f32 * line_height,
                BuiltinFont::Helvetica,
            );
        }
    }
}
