//! PDF implementation of the sheet composer's card renderer

use crate::config::Settings;
use crate::layout::CardRenderer;
use crate::model::Card;

use super::components::{
    ActionFrontRenderer, BackDesign, BackRenderer, BlankRenderer, CardFace, PlayerFrontRenderer,
    PropertyFrontRenderer,
};
use super::helpers::layer::LayerBuilder;

/// Draws each card face into its own `LayerBuilder` in card-local coordinates
#[derive(Debug, Clone, Copy)]
pub struct PdfCardRenderer {
    face: CardFace,
}

impl PdfCardRenderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            face: CardFace {
                width: settings.card_width,
                height: settings.card_height,
                language: settings.language,
            },
        }
    }

    pub fn face(&self) -> &CardFace {
        &self.face
    }
}

impl CardRenderer for PdfCardRenderer {
    type Element = LayerBuilder;

    fn front(&self, card: &Card) -> LayerBuilder {
        let mut layer = LayerBuilder::new();
        match card {
            Card::Property(property) => {
                PropertyFrontRenderer::new(&self.face).render(&mut layer, property)
            }
            Card::Action(action) => ActionFrontRenderer::new(&self.face).render(&mut layer, action),
            Card::Player(player) => PlayerFrontRenderer::new(&self.face).render(&mut layer, player),
        }
        layer
    }

    fn back(&self, card: &Card) -> LayerBuilder {
        let mut layer = LayerBuilder::new();
        BackRenderer::new(&self.face).render(&mut layer, &BackDesign::for_card(card));
        layer
    }

    fn blank(&self) -> LayerBuilder {
        let mut layer = LayerBuilder::new();
        BlankRenderer::new(&self.face).render(&mut layer);
        layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{assemble_deck, Language};

    #[test]
    fn test_every_card_renders_both_sides() {
        let renderer = PdfCardRenderer::new(&Settings::default());

        for language in Language::all() {
            for card in assemble_deck(language, true) {
                assert!(!renderer.front(&card).is_empty(), "front of {}", card);
                assert!(!renderer.back(&card).is_empty(), "back of {}", card);
            }
        }
        assert!(!renderer.blank().is_empty());
    }

    #[test]
    fn test_face_follows_settings() {
        let settings = Settings::default().with_language(Language::En);
        let renderer = PdfCardRenderer::new(&settings);
        assert_eq!(renderer.face().language, Language::En);
        assert_eq!(renderer.face().width, 54.0);
    }
}
