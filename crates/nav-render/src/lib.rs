//! `nav-render` — drawing-surface abstraction and the frame painter.
//!
//! The loop in `nav-viz` treats the surface as write-only: it issues clear,
//! line, and circle calls and never reads pixels back.  Backends implement
//! the four-method [`Surface`] trait; two ship here:
//!
//! | Backend              | Use                                          |
//! |----------------------|----------------------------------------------|
//! | [`NullSurface`]      | headless runs, benchmarks                    |
//! | [`RecordingSurface`] | tests and demos — captures every draw call   |
//!
//! A host embedding the visualizer in a real UI implements `Surface` over
//! its own canvas and keeps the rest of the stack unchanged.

pub mod color;
pub mod painter;
pub mod recording;
pub mod surface;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use painter::{FrameStyle, Painter};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{NullSurface, Surface};
