//! 2D rendering module
//!
//! Everything is drawn through the `Canvas` trait: a handful of filled
//! primitives plus text. The window backend implements it in `platform`;
//! tests use a recording double.

pub mod scene;
pub mod shapes;

pub use scene::draw_scene;

use glam::Vec2;

use crate::palette::{self, Rgb};

/// Text options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: u16,
    pub color: Rgb,
    pub bold: bool,
    /// `pos` is the text centre when set, its top-left corner otherwise
    pub centered: bool,
}

impl TextStyle {
    /// Ink-coloured text centred on its position
    pub fn centered(size: u16) -> Self {
        Self {
            size,
            color: palette::INK,
            bold: false,
            centered: true,
        }
    }

    /// Ink-coloured text anchored at its top-left corner
    pub fn left(size: u16) -> Self {
        Self {
            centered: false,
            ..Self::centered(size)
        }
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Drawing surface in screen pixels (origin top-left, y down)
pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    /// Convex polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);
    fn fill_rounded_rect(&mut self, min: Vec2, size: Vec2, corner_radius: f32, color: Rgb);
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgb);
    fn text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}
