//! Loop observer trait for progress reporting and statistics.

use nav_core::FrameTick;

/// Callbacks invoked by [`Visualization::on_frame`][crate::Visualization::on_frame]
/// at key points in the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — edge counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct EdgeStats { frames: u64, edges: usize }
///
/// impl VizObserver for EdgeStats {
///     fn on_frame_end(&mut self, _frame: FrameTick, edges_drawn: usize) {
///         self.frames += 1;
///         self.edges += edges_drawn;
///     }
/// }
/// ```
pub trait VizObserver {
    /// Called at the start of each tick, before physics or drawing.
    fn on_frame_start(&mut self, _frame: FrameTick) {}

    /// Called after the frame has been painted.
    ///
    /// `edges_drawn` is the size of this frame's proximity graph.
    fn on_frame_end(&mut self, _frame: FrameTick, _edges_drawn: usize) {}

    /// Called when the loop stops itself because the surface went away.
    ///
    /// Host-initiated `end()` does not report here — the host already knows.
    fn on_stopped(&mut self, _final_frame: FrameTick) {}
}

/// A [`VizObserver`] that does nothing.  Use when you need to drive the
/// loop but don't want callbacks.
pub struct NoopObserver;

impl VizObserver for NoopObserver {}
