//! Collision primitives
//!
//! Two tests cover every pair in the game: circle footprints for
//! bullets, enemies and the player; axis-aligned boxes for pickups.

use glam::Vec2;

/// Circle-circle overlap: `|a - b|² <= (ra + rb)²`
///
/// Touching circles count as overlapping.
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) <= reach * reach
}

/// Axis-aligned rectangle described by its centre and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Square box of side `2 * half` centred on `center`
    pub fn square(center: Vec2, half: f32) -> Self {
        Self::new(center, Vec2::splat(half))
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Strict overlap; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}
