//! Card backs
//!
//! All backs share a white frame and a red MONOPOLY strip. The emblem below the
//! strip depends on the card: a diamond for Chance, a house for title deeds and
//! Community Chest, and the token disc with its emblem for player cards.

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::model::{ActionDeck, Card, HexColor, TokenIcon};
use crate::render::helpers::colors::{
    contrast_text, pdf_color, CHANCE_ORANGE, CHEST_BLUE, MONOPOLY_RED, WHITE,
};
use crate::render::helpers::layer::LayerBuilder;

use super::token::draw_token_icon;
use super::{text_centered, CardFace};

const FRAME_INSET: f32 = 2.0;
const STRIP_HEIGHT: f32 = 14.0;
const LOGO_FONT_SIZE: f32 = 12.0;
const EMBLEM_CENTER_Y: f32 = 36.0;
const DIAMOND_HALF: f32 = 16.0;
const TOKEN_RADIUS: f32 = 14.0;

/// Emblem printed on the back of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackDesign {
    Chance,
    House,
    Token {
        icon: TokenIcon,
        color: HexColor,
        name: String,
    },
}

impl BackDesign {
    pub fn for_card(card: &Card) -> Self {
        match card {
            Card::Action(action) if action.deck == ActionDeck::Chance => BackDesign::Chance,
            Card::Action(_) | Card::Property(_) => BackDesign::House,
            Card::Player(player) => BackDesign::Token {
                icon: player.token_icon,
                color: player.token_color,
                name: player.token_name.clone(),
            },
        }
    }
}

pub struct BackRenderer<'a> {
    face: &'a CardFace,
}

impl<'a> BackRenderer<'a> {
    pub fn new(face: &'a CardFace) -> Self {
        Self { face }
    }

    pub fn render(&self, layer: &mut LayerBuilder, design: &BackDesign) {
        let w = self.face.width;
        let h = self.face.height;

        layer.set_fill_color(Color::Rgb(WHITE));
        layer.add_rect(Mm(0.0), Mm(0.0), Mm(w), Mm(h), PaintMode::Fill);
        layer.set_outline_color(Color::Rgb(MONOPOLY_RED));
        layer.set_outline_thickness(1.0);
        layer.add_rect(
            Mm(FRAME_INSET),
            Mm(FRAME_INSET),
            Mm(w - FRAME_INSET),
            Mm(h - FRAME_INSET),
            PaintMode::Stroke,
        );

        let strip_top = h - FRAME_INSET;
        let strip_bottom = strip_top - STRIP_HEIGHT;
        layer.set_fill_color(Color::Rgb(MONOPOLY_RED));
        layer.add_rect(
            Mm(FRAME_INSET),
            Mm(strip_bottom),
            Mm(w - FRAME_INSET),
            Mm(strip_top),
            PaintMode::Fill,
        );
        layer.set_fill_color(Color::Rgb(WHITE));
        text_centered(
            layer,
            "MONOPOLY",
            LOGO_FONT_SIZE,
            self.face.center_x(),
            strip_bottom + 4.8,
            BuiltinFont::HelveticaBold,
        );

        match design {
            BackDesign::Chance => self.render_diamond(layer),
            BackDesign::House => self.render_house(layer),
            BackDesign::Token { icon, color, name } => {
                self.render_token(layer, *icon, *color, name)
            }
        }
    }

    fn render_diamond(&self, layer: &mut LayerBuilder) {
        let cx = self.face.center_x();
        let cy = EMBLEM_CENTER_Y;

        layer.set_fill_color(pdf_color(CHANCE_ORANGE));
        layer.add_polygon(
            &[
                (cx, cy + DIAMOND_HALF),
                (cx + DIAMOND_HALF, cy),
                (cx, cy - DIAMOND_HALF),
                (cx - DIAMOND_HALF, cy),
            ],
            PaintMode::Fill,
        );

        layer.set_fill_color(Color::Rgb(contrast_text(CHANCE_ORANGE)));
        text_centered(layer, "M", 24.0, cx, cy - 3.0, BuiltinFont::HelveticaBold);
    }

    fn render_house(&self, layer: &mut LayerBuilder) {
        let cx = self.face.center_x();
        let body_bottom = EMBLEM_CENTER_Y - 14.0;
        let body_top = EMBLEM_CENTER_Y + 2.0;
        let half = 11.0;

        layer.set_fill_color(pdf_color(CHEST_BLUE));
        layer.add_polygon(
            &[
                (cx - half - 3.0, body_top),
                (cx + half + 3.0, body_top),
                (cx, body_top + 13.0),
            ],
            PaintMode::Fill,
        );
        layer.add_rect(
            Mm(cx - half),
            Mm(body_bottom),
            Mm(cx + half),
            Mm(body_top),
            PaintMode::Fill,
        );

        // Door
        layer.set_fill_color(Color::Rgb(WHITE));
        layer.add_rect(
            Mm(cx - 3.0),
            Mm(body_bottom),
            Mm(cx + 3.0),
            Mm(body_bottom + 9.0),
            PaintMode::Fill,
        );
    }

    fn render_token(
        &self,
        layer: &mut LayerBuilder,
        icon: TokenIcon,
        color: HexColor,
        name: &str,
    ) {
        let cx = self.face.center_x();
        let cy = EMBLEM_CENTER_Y;

        layer.set_fill_color(pdf_color(color));
        layer.add_circle(Mm(cx), Mm(cy), Mm(TOKEN_RADIUS), PaintMode::Fill);
        // Outline keeps pale tokens visible on the white back
        layer.set_outline_color(Color::Rgb(MONOPOLY_RED));
        layer.set_outline_thickness(0.6);
        layer.add_circle(Mm(cx), Mm(cy), Mm(TOKEN_RADIUS), PaintMode::Stroke);

        layer.set_fill_color(Color::Rgb(contrast_text(color)));
        draw_token_icon(layer, icon, cx, cy, TOKEN_RADIUS * 0.7);

        layer.set_fill_color(Color::Rgb(MONOPOLY_RED));
        text_centered(
            layer,
            name,
            9.0,
            cx,
            cy - TOKEN_RADIUS - 7.0,
            BuiltinFont::HelveticaBold,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{assemble_deck, CardKind, Language};

    #[test]
    fn test_design_per_card() {
        let deck = assemble_deck(Language::En, true);

        for card in &deck {
            let design = BackDesign::for_card(card);
            match card {
                Card::Action(a) if a.deck == ActionDeck::Chance => {
                    assert_eq!(design, BackDesign::Chance)
                }
                Card::Player(p) => assert!(matches!(
                    design,
                    BackDesign::Token { ref name, .. } if *name == p.token_name
                )),
                _ => assert_eq!(design, BackDesign::House),
            }
        }
        assert!(deck.iter().any(|c| c.kind() == CardKind::Player));
    }

    #[test]
    fn test_token_icon_changes_back() {
        let face = CardFace {
            width: 54.0,
            height: 85.5,
            language: Language::En,
        };
        let renderer = BackRenderer::new(&face);
        let color = HexColor::from_rgb(0x1565c0);

        let draw = |icon: TokenIcon| {
            let mut layer = LayerBuilder::new();
            renderer.render(
                &mut layer,
                &BackDesign::Token {
                    icon,
                    color,
                    name: "TOKEN".to_string(),
                },
            );
            format!("{:?}", layer.ops())
        };

        assert_ne!(draw(TokenIcon::Hat), draw(TokenIcon::Boot));
        assert_eq!(draw(TokenIcon::Cat), draw(TokenIcon::Cat));
    }

    #[test]
    fn test_every_design_draws() {
        let face = CardFace {
            width: 54.0,
            height: 85.5,
            language: Language::Es,
        };
        let renderer = BackRenderer::new(&face);
        let designs = [
            BackDesign::Chance,
            BackDesign::House,
            BackDesign::Token {
                icon: TokenIcon::Ship,
                color: HexColor::from_rgb(0x2e7d32),
                name: "BARCO".to_string(),
            },
        ];

        for design in &designs {
            let mut layer = LayerBuilder::new();
            renderer.render(&mut layer, design);
            assert!(layer.ops().len() > 10, "{:?}", design);
        }
    }
}
