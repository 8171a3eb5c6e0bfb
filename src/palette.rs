//! Centralized pastel color palette.
//! Simulation entities carry these values; the renderer converts them at draw time.

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BACKGROUND: Rgb = Rgb::new(250, 245, 255);
pub const PINK: Rgb = Rgb::new(255, 182, 193);
pub const BLUE: Rgb = Rgb::new(173, 216, 230);
pub const GREEN: Rgb = Rgb::new(152, 251, 152);
pub const MOCCASIN: Rgb = Rgb::new(255, 228, 181);
pub const PLUM: Rgb = Rgb::new(221, 160, 221);
pub const INK: Rgb = Rgb::new(60, 60, 60);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GOLD: Rgb = Rgb::new(255, 215, 0);
pub const HOT_PINK: Rgb = Rgb::new(255, 105, 180);
pub const STAR: Rgb = Rgb::new(240, 240, 255);
pub const SOFT_GREY: Rgb = Rgb::new(200, 200, 200);
pub const MID_GREY: Rgb = Rgb::new(120, 120, 120);
pub const HINT_GREY: Rgb = Rgb::new(100, 100, 100);

/// Enemy colors, picked uniformly at spawn
pub const ENEMY_COLORS: [Rgb; 5] = [PINK, BLUE, GREEN, MOCCASIN, PLUM];
