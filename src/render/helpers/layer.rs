//! Operation collector for printpdf 0.8
//!
//! Card faces are drawn into a `LayerBuilder` in card-local coordinates (origin at
//! the card's bottom-left corner) and later placed on a sheet with `place`.

use printpdf::{
    BuiltinFont, Color, CurTransMat, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon,
    PolygonRing, Pt, TextItem, WindingOrder,
};

/// A builder that collects PDF operations
#[derive(Debug, Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point {
            x: Mm(x).into(),
            y: Mm(y).into(),
        },
        bezier: false,
    }
}

fn curve_point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        bezier: true,
        ..point(x, y)
    }
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Extend with operations from another builder
    pub fn extend(&mut self, other: LayerBuilder) {
        self.ops.extend(other.ops);
    }

    /// Append another builder's operations shifted so its origin lands at (x, y)
    pub fn place(&mut self, other: LayerBuilder, x: Mm, y: Mm) {
        self.save_graphics_state();
        self.set_transform(CurTransMat::Translate(x.into(), y.into()));
        self.extend(other);
        self.restore_graphics_state();
    }

    /// Set the fill color
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with one of the PDF standard fonts, baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle from lower-left (x1, y1) to upper-right (x2, y2)
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        self.add_polygon(&[(x1.0, y1.0), (x2.0, y1.0), (x2.0, y2.0), (x1.0, y2.0)], mode);
    }

    /// Add a closed polygon through the given (x, y) points in mm
    pub fn add_polygon(&mut self, points: &[(f32, f32)], mode: PaintMode) {
        if points.len() < 3 {
            return;
        }

        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: points.iter().map(|&(x, y)| point(x, y)).collect(),
            }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: vec![point(x1.0, y1.0), point(x2.0, y2.0)],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Draw a circle approximated with four cubic Bezier curves
    pub fn add_circle(&mut self, center_x: Mm, center_y: Mm, radius: Mm, mode: PaintMode) {
        // k = 4 * (sqrt(2) - 1) / 3
        let k = 0.552_284_8_f32;
        let (cx, cy, r) = (center_x.0, center_y.0, radius.0);
        let kr = k * r;

        let points = vec![
            point(cx + r, cy),
            curve_point(cx + r, cy + kr),
            curve_point(cx + kr, cy + r),
            curve_point(cx, cy + r),
            curve_point(cx - kr, cy + r),
            curve_point(cx - r, cy + kr),
            curve_point(cx - r, cy),
            curve_point(cx - r, cy - kr),
            curve_point(cx - kr, cy - r),
            curve_point(cx, cy - r),
            curve_point(cx + kr, cy - r),
            curve_point(cx + r, cy - kr),
            curve_point(cx + r, cy),
        ];

        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Save graphics state
    pub fn save_graphics_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    /// Restore graphics state
    pub fn restore_graphics_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }

    /// Set the current transformation matrix until the graphics state is restored
    pub fn set_transform(&mut self, matrix: CurTransMat) {
        self.ops.push(Op::SetTransformationMatrix { matrix });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text("", 10.0, Mm(0.0), Mm(0.0), BuiltinFont::Helvetica);
        assert!(layer.is_empty());

        layer.use_text("GO", 10.0, Mm(0.0), Mm(0.0), BuiltinFont::Helvetica);
        assert_eq!(layer.ops().len(), 5);
    }

    #[test]
    fn test_degenerate_polygon_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.add_polygon(&[(0.0, 0.0), (1.0, 1.0)], PaintMode::Fill);
        assert!(layer.is_empty());
    }

    #[test]
    fn test_place_wraps_in_graphics_state() {
        let mut card = LayerBuilder::new();
        card.add_rect(Mm(0.0), Mm(0.0), Mm(54.0), Mm(85.5), PaintMode::Stroke);

        let mut sheet = LayerBuilder::new();
        sheet.place(card, Mm(20.0), Mm(16.25));

        let ops = sheet.ops();
        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[0], Op::SaveGraphicsState));
        assert!(matches!(ops[1], Op::SetTransformationMatrix { .. }));
        assert!(matches!(ops[2], Op::DrawPolygon { .. }));
        assert!(matches!(ops[3], Op::RestoreGraphicsState));
    }
}
