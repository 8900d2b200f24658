//! The abstract 2-D raster canvas.

use nav_core::{Bounds, Vec2};

use crate::Color;

/// Write-only drawing surface.
///
/// Draw calls are infallible by design: the visualizer is decorative and
/// must never propagate a rendering failure into the host.  A backend whose
/// underlying canvas has gone away reports it through
/// [`is_ready`](Surface::is_ready) — the loop checks that before ticking
/// and stops silently — and simply drops any call it still receives.
pub trait Surface {
    /// Erase the rectangle `[0, width] × [0, height]`.
    fn clear(&mut self, bounds: Bounds);

    /// Straight line segment from `from` to `to`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Circle outline.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32);

    /// `false` once the backing canvas has been destroyed.  Default: always
    /// ready.
    fn is_ready(&self) -> bool {
        true
    }
}

/// A [`Surface`] that swallows every call.  Use for headless runs where
/// only the simulation side matters.
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _bounds: Bounds) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _width: f32) {}
}
