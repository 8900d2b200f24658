//! Surface-space geometry: `Vec2` and `Bounds`.
//!
//! Coordinates are `f32` pixels on the drawing surface.  Single precision is
//! ample for a canvas a few hundred units across while keeping `Vec2` an
//! 8-byte `Copy` value.

use std::ops::{Add, AddAssign, Mul, Sub};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D point or direction in surface coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance — much cheaper than `distance` for
    /// strict-threshold comparisons (`d < t` ⇔ `d² < t²` for `t ≥ 0`).
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The drawing surface rectangle `[0, width] × [0, height]`.
///
/// Nodes are initialized inside it and reflected at its edges; the renderer
/// clears exactly this rectangle every frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` if `p` lies inside the closed rectangle.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Copy with non-finite or negative dimensions clamped to zero.
    ///
    /// A zero-sized surface is valid: the simulation runs, nothing useful is
    /// drawn, nothing fails.
    pub fn clamped(self) -> Self {
        let sane = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(sane(self.width), sane(self.height))
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}×{:.0}", self.width, self.height)
    }
}
