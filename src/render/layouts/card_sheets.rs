//! Card Sheets Layout Renderer
//!
//! Lays the deck out on A4 pages, nine cards per page in a 3x3 grid. Every deck
//! page produces two PDF pages: the fronts, then the backs, mirrored by default
//! so that a long-edge manual flip lines each back up with its front.

use printpdf::{BuiltinFont, Color, Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::defaults::CUT_LINE_THICKNESS;
use crate::config::Settings;
use crate::error::RenderError;
use crate::layout::{compose_deck, Sheet};
use crate::model::{Card, Label};

use crate::render::cards::PdfCardRenderer;
use crate::render::helpers::colors::{BLACK, LIGHT_GRAY};
use crate::render::helpers::compress::compress_or_keep;
use crate::render::helpers::grid::GridGeometry;
use crate::render::helpers::layer::LayerBuilder;

/// Length of the cut marks drawn past the grid edges
const CUT_MARK_OVERHANG: f32 = 3.0;

/// Card sheets renderer
pub struct CardSheetsRenderer {
    settings: Settings,
}

impl CardSheetsRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Generate a duplex-ready PDF for the given deck
    pub fn render(&self, deck: &[Card]) -> Result<Vec<u8>, RenderError> {
        if deck.is_empty() {
            return Err(RenderError::EmptyDeck);
        }

        let renderer = PdfCardRenderer::new(&self.settings);
        let sheets = compose_deck(deck, self.settings.compose_options(), &renderer)?;
        let grid = GridGeometry::new(&self.settings);

        let title = self.settings.language.text(Label::AppTitle);
        let mut doc = PdfDocument::new(title);

        let mut pages = Vec::with_capacity(sheets.len());
        for sheet in sheets {
            log::debug!("Rendering {}", sheet.label);
            let mut layer = LayerBuilder::new();
            self.render_sheet(&mut layer, sheet, &grid);
            pages.push(PdfPage::new(
                Mm(self.settings.page_width),
                Mm(self.settings.page_height),
                layer.into_ops(),
            ));
        }
        log::info!("Rendered {} sheets", pages.len());

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }

        if self.settings.compress {
            Ok(compress_or_keep(bytes))
        } else {
            Ok(bytes)
        }
    }

    /// Place the nine rendered slots of one sheet, then the decorations on top
    fn render_sheet(&self, layer: &mut LayerBuilder, sheet: Sheet<LayerBuilder>, grid: &GridGeometry) {
        if self.settings.show_labels {
            layer.set_fill_color(Color::Rgb(BLACK));
            layer.use_text(
                sheet.label.as_str(),
                self.settings.label_font_size,
                Mm(grid.start_x),
                Mm(grid.label_baseline()),
                BuiltinFont::Helvetica,
            );
        }

        for (slot, element) in sheet.slots.into_iter().enumerate() {
            let (x, y) = grid.slot_origin(slot);
            layer.place(element, Mm(x), Mm(y));
        }

        if self.settings.cut_lines {
            self.render_cut_lines(layer, grid);
        }
    }

    /// Guides along every card edge, running slightly past the grid
    fn render_cut_lines(&self, layer: &mut LayerBuilder, grid: &GridGeometry) {
        layer.set_outline_color(Color::Rgb(LIGHT_GRAY));
        layer.set_outline_thickness(CUT_LINE_THICKNESS);

        let bottom = grid.bottom_y() - CUT_MARK_OVERHANG;
        let top = grid.top_y + CUT_MARK_OVERHANG;
        for x in grid.cut_xs() {
            layer.add_line(Mm(x), Mm(bottom), Mm(x), Mm(top));
        }

        let left = grid.start_x - CUT_MARK_OVERHANG;
        let right = grid.right_x() + CUT_MARK_OVERHANG;
        for y in grid.cut_ys() {
            layer.add_line(Mm(left), Mm(y), Mm(right), Mm(y));
        }
    }
}
