//! `RecordingSurface` — a surface backend that captures draw calls.

use nav_core::{Bounds, Vec2};

use crate::{Color, Surface};

/// One captured draw call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { bounds: Bounds },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, color: Color, width: f32 },
}

/// A [`Surface`] that records everything drawn onto it.
///
/// Tests use it to assert the draw-order contract and the
/// no-writes-after-teardown guarantee; the demo uses it for per-run
/// statistics.  [`destroy`](RecordingSurface::destroy) simulates the host
/// tearing the canvas out from under the loop: the surface stops reporting
/// ready and drops all subsequent calls.
#[derive(Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    destroyed: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands captured so far, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the captured commands (e.g. between frames in a test).
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Simulate the backing canvas being destroyed by the host.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn clear_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Clear { .. }))
    }

    pub fn line_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn fill_circle_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }

    pub fn stroke_circle_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    fn record(&mut self, command: DrawCommand) {
        if !self.destroyed {
            self.commands.push(command);
        }
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.record(DrawCommand::Clear { bounds });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.record(DrawCommand::Line { from, to, color, width });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.record(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.record(DrawCommand::StrokeCircle { center, radius, color, width });
    }

    fn is_ready(&self) -> bool {
        !self.destroyed
    }
}
