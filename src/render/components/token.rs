//! Vector emblems for the player tokens
//!
//! Each emblem is drawn from simple shapes inside a box of half-size `r` centered
//! on (cx, cy), in the current fill color.

use printpdf::{Mm, PaintMode};

use crate::model::TokenIcon;
use crate::render::helpers::layer::LayerBuilder;

fn rect(layer: &mut LayerBuilder, x1: f32, y1: f32, x2: f32, y2: f32) {
    layer.add_rect(Mm(x1), Mm(y1), Mm(x2), Mm(y2), PaintMode::Fill);
}

fn disc(layer: &mut LayerBuilder, cx: f32, cy: f32, r: f32) {
    layer.add_circle(Mm(cx), Mm(cy), Mm(r), PaintMode::Fill);
}

/// Draw the emblem for `icon`
pub fn draw_token_icon(layer: &mut LayerBuilder, icon: TokenIcon, cx: f32, cy: f32, r: f32) {
    // Unit coordinates scaled into the emblem box
    let p = |u: f32, v: f32| (cx + u * r, cy + v * r);

    match icon {
        TokenIcon::Hat => {
            let (x1, y1) = p(-0.9, -0.55);
            let (x2, y2) = p(0.9, -0.35);
            rect(layer, x1, y1, x2, y2);
            let (x1, y1) = p(-0.5, -0.35);
            let (x2, y2) = p(0.5, 0.7);
            rect(layer, x1, y1, x2, y2);
        }
        TokenIcon::Dog => {
            let (hx, hy) = p(0.0, -0.1);
            disc(layer, hx, hy, 0.55 * r);
            // Floppy ears hang beside the head
            let (x1, y1) = p(-0.8, -0.4);
            let (x2, y2) = p(-0.5, 0.4);
            rect(layer, x1, y1, x2, y2);
            let (x1, y1) = p(0.5, -0.4);
            let (x2, y2) = p(0.8, 0.4);
            rect(layer, x1, y1, x2, y2);
        }
        TokenIcon::Car => {
            let (x1, y1) = p(-0.9, -0.3);
            let (x2, y2) = p(0.9, 0.1);
            rect(layer, x1, y1, x2, y2);
            layer.add_polygon(
                &[p(-0.5, 0.1), p(0.45, 0.1), p(0.25, 0.5), p(-0.3, 0.5)],
                PaintMode::Fill,
            );
            let (wx, wy) = p(-0.5, -0.35);
            disc(layer, wx, wy, 0.22 * r);
            let (wx, wy) = p(0.5, -0.35);
            disc(layer, wx, wy, 0.22 * r);
        }
        TokenIcon::Ship => {
            layer.add_polygon(
                &[p(-0.9, -0.2), p(0.9, -0.2), p(0.6, -0.6), p(-0.6, -0.6)],
                PaintMode::Fill,
            );
            layer.add_polygon(&[p(-0.05, -0.1), p(-0.05, 0.8), p(0.6, -0.1)], PaintMode::Fill);
            layer.add_polygon(&[p(-0.15, -0.1), p(-0.15, 0.6), p(-0.6, -0.1)], PaintMode::Fill);
        }
        TokenIcon::Cat => {
            let (hx, hy) = p(0.0, -0.15);
            disc(layer, hx, hy, 0.55 * r);
            // Pointed ears stand on top
            layer.add_polygon(&[p(-0.5, 0.1), p(-0.1, 0.3), p(-0.45, 0.75)], PaintMode::Fill);
            layer.add_polygon(&[p(0.5, 0.1), p(0.1, 0.3), p(0.45, 0.75)], PaintMode::Fill);
        }
        TokenIcon::Boot => {
            layer.add_polygon(
                &[
                    p(-0.4, 0.8),
                    p(0.1, 0.8),
                    p(0.1, -0.1),
                    p(0.8, -0.3),
                    p(0.8, -0.6),
                    p(-0.4, -0.6),
                ],
                PaintMode::Fill,
            );
        }
        TokenIcon::Thimble => {
            layer.add_polygon(
                &[p(-0.55, -0.45), p(0.55, -0.45), p(0.4, 0.5), p(-0.4, 0.5)],
                PaintMode::Fill,
            );
            let (tx, ty) = p(0.0, 0.5);
            disc(layer, tx, ty, 0.4 * r);
            let (x1, y1) = p(-0.65, -0.65);
            let (x2, y2) = p(0.65, -0.45);
            rect(layer, x1, y1, x2, y2);
        }
        TokenIcon::Wheelbarrow => {
            layer.add_polygon(
                &[p(-0.6, 0.3), p(0.5, 0.3), p(0.2, -0.2), p(-0.4, -0.2)],
                PaintMode::Fill,
            );
            let (wx, wy) = p(0.35, -0.45);
            disc(layer, wx, wy, 0.25 * r);
            // Handle
            let (x1, y1) = p(-0.95, 0.15);
            let (x2, y2) = p(-0.6, 0.25);
            rect(layer, x1, y1, x2, y2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICONS: [TokenIcon; 8] = [
        TokenIcon::Hat,
        TokenIcon::Dog,
        TokenIcon::Car,
        TokenIcon::Ship,
        TokenIcon::Cat,
        TokenIcon::Boot,
        TokenIcon::Thimble,
        TokenIcon::Wheelbarrow,
    ];

    fn emblem_ops(icon: TokenIcon) -> String {
        let mut layer = LayerBuilder::new();
        draw_token_icon(&mut layer, icon, 27.0, 36.0, 10.0);
        format!("{:?}", layer.ops())
    }

    #[test]
    fn test_every_icon_draws() {
        for icon in ICONS {
            let mut layer = LayerBuilder::new();
            draw_token_icon(&mut layer, icon, 27.0, 36.0, 10.0);
            assert!(!layer.is_empty(), "{:?}", icon);
        }
    }

    #[test]
    fn test_icons_are_distinct() {
        let drawn: Vec<String> = ICONS.iter().map(|&icon| emblem_ops(icon)).collect();
        for (i, a) in drawn.iter().enumerate() {
            for b in &drawn[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
