//! `nav-viz` — the simulation-and-render loop.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──begin()──▶ Running ──end() / surface lost──▶ Stopped
//!                               │  ▲
//!                               └──┘ on_frame(): advance → edges → paint,
//!                                    then unconditionally request the next
//!                                    frame
//! ```
//!
//! `Stopped` is terminal.  There is no resume: a fresh mount builds a new
//! [`Visualization`], which spawns a new Node Store.
//!
//! # Scheduling model
//!
//! The loop never blocks and never owns a thread.  The host exposes its
//! per-frame callback service as a [`FrameScheduler`]; the loop holds at
//! most one pending [`FrameHandle`] at a time and `end()` cancels it
//! synchronously, so no tick can ever run against a torn-down surface.
//! Handles double as staleness tokens — a handle that is not the pending
//! one is ignored, which makes a late-firing cancelled callback harmless.
//!
//! # Quick-start
//!
//! ```rust
//! use nav_core::VizConfig;
//! use nav_render::RecordingSurface;
//! use nav_viz::{ManualScheduler, NoopObserver, Visualization};
//!
//! let mut sched = ManualScheduler::new();
//! let mut viz = Visualization::new(VizConfig::default(), RecordingSurface::new());
//! viz.begin(&mut sched).unwrap();
//! viz.run_frames(60, &mut sched, &mut NoopObserver);
//! viz.end(&mut sched);
//! ```

pub mod error;
pub mod observer;
pub mod scheduler;
pub mod viz;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{VizError, VizResult};
pub use observer::{NoopObserver, VizObserver};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use viz::{Phase, Visualization};
