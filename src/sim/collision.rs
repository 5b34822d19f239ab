//! Axis-aligned collision detection
//!
//! Every entity in the runner is an upright box, so a single overlap test
//! serves hen-vs-obstacle and hen-vs-collectible alike.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left corner plus extent (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True when the boxes share interior area.
    ///
    /// Comparisons are strict: boxes that only touch along an edge or a
    /// corner do not collide.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Check whether two boxes overlap
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}
