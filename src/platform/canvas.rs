//! `Canvas` backend on macroquad's immediate-mode shapes

use glam::Vec2;
use macroquad::prelude as mq;

use crate::palette::Rgb;
use crate::renderer::shapes::rgb_to_f32;
use crate::renderer::{Canvas, TextStyle};

fn color(c: Rgb) -> mq::Color {
    let [r, g, b] = rgb_to_f32(c);
    mq::Color::new(r, g, b, 1.0)
}

fn v(p: Vec2) -> mq::Vec2 {
    mq::vec2(p.x, p.y)
}

/// Draws straight to the current macroquad frame
#[derive(Debug, Default)]
pub struct MacroquadCanvas;

impl MacroquadCanvas {
    pub fn new() -> Self {
        Self
    }

    fn draw_text_once(text: &str, x: f32, y: f32, style: &TextStyle) {
        mq::draw_text_ex(
            text,
            x,
            y,
            mq::TextParams {
                font_size: style.size,
                color: color(style.color),
                ..Default::default()
            },
        );
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, c: Rgb) {
        mq::clear_background(color(c));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, c: Rgb) {
        mq::draw_circle(center.x, center.y, radius, color(c));
    }

    fn fill_polygon(&mut self, points: &[Vec2], c: Rgb) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        // Triangle fan around the first vertex
        for pair in rest.windows(2) {
            mq::draw_triangle(v(first), v(pair[0]), v(pair[1]), color(c));
        }
    }

    fn fill_rounded_rect(&mut self, min: Vec2, size: Vec2, corner_radius: f32, c: Rgb) {
        let col = color(c);
        let r = corner_radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
        mq::draw_rectangle(min.x + r, min.y, size.x - 2.0 * r, size.y, col);
        mq::draw_rectangle(min.x, min.y + r, size.x, size.y - 2.0 * r, col);
        for corner in [
            Vec2::new(min.x + r, min.y + r),
            Vec2::new(min.x + size.x - r, min.y + r),
            Vec2::new(min.x + r, min.y + size.y - r),
            Vec2::new(min.x + size.x - r, min.y + size.y - r),
        ] {
            mq::draw_circle(corner.x, corner.y, r, col);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, c: Rgb) {
        mq::draw_line(from.x, from.y, to.x, to.y, thickness, color(c));
    }

    fn text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        let dims = mq::measure_text(text, None, style.size, 1.0);
        // macroquad anchors text at the baseline
        let (x, y) = if style.centered {
            (
                pos.x - dims.width / 2.0,
                pos.y - dims.height / 2.0 + dims.offset_y,
            )
        } else {
            (pos.x, pos.y + dims.offset_y)
        };

        Self::draw_text_once(text, x, y, style);
        if style.bold {
            Self::draw_text_once(text, x + 1.0, y, style);
        }
    }
}
