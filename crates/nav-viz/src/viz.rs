//! The `Visualization` struct and its tick loop.

use log::{debug, warn};

use nav_core::{FrameTick, VizConfig};
use nav_render::{FrameStyle, Painter, Surface};
use nav_topology::{NodeState, NodeStore, proximity_edges};

use crate::{FrameHandle, FrameScheduler, VizError, VizObserver, VizResult};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Lifecycle phase of one visualization session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, Node Store not yet created, nothing scheduled.
    Uninitialized,
    /// Ticking: every frame re-schedules the next one.
    Running,
    /// Terminal.  The Node Store is gone and no tick will ever run again.
    Stopped,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Uninitialized => write!(f, "uninitialized"),
            Phase::Running => write!(f, "running"),
            Phase::Stopped => write!(f, "stopped"),
        }
    }
}

// ── Visualization ─────────────────────────────────────────────────────────────

/// One session of the topology animation: owns the surface, the Node Store,
/// the painter, and the single pending frame callback.
///
/// The loop is the store's only reader and writer.  Scoped-resource rule:
/// the pending [`FrameHandle`] is acquired on `begin` and on every tick,
/// and released on every exit path — `end()`, surface loss, and stale-fire
/// all leave nothing scheduled or leave exactly one fresh handle pending.
pub struct Visualization<S: Surface> {
    /// Sanitized copy of the host's mount parameters.
    config: VizConfig,

    phase: Phase,

    /// `Some` exactly while `phase == Running`.
    store: Option<NodeStore>,

    painter: Painter,

    /// The host's canvas.  Write-only; never touched unless `Running`.
    surface: S,

    /// The one outstanding frame callback, if any.
    pending: Option<FrameHandle>,

    /// Frames completed this session.
    frame: FrameTick,
}

impl<S: Surface> Visualization<S> {
    /// Wrap `surface` with the given mount parameters.  No store exists and
    /// nothing is scheduled until [`begin`](Self::begin).
    ///
    /// The config is sanitized here ([`VizConfig::sanitized`]) so every
    /// later read sees safe values.
    pub fn new(config: VizConfig, surface: S) -> Self {
        Self {
            config: config.sanitized(),
            phase: Phase::Uninitialized,
            store: None,
            painter: Painter::default(),
            surface,
            pending: None,
            frame: FrameTick::ZERO,
        }
    }

    /// Replace the default frame style (builder-style, before `begin`).
    pub fn with_style(mut self, style: FrameStyle) -> Self {
        self.painter = Painter::new(style);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames completed so far this session.
    #[inline]
    pub fn frame(&self) -> FrameTick {
        self.frame
    }

    /// The live Node Store (`None` unless running).
    #[inline]
    pub fn store(&self) -> Option<&NodeStore> {
        self.store.as_ref()
    }

    /// The sanitized mount parameters.
    #[inline]
    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the backend (hosts resize it, tests destroy it).
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Reclaim the surface (e.g. to inspect a recording after teardown).
    pub fn into_surface(self) -> S {
        self.surface
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// `uninitialized → running`: spawn the Node Store from the seeded RNG
    /// and schedule the first tick.
    ///
    /// # Errors
    ///
    /// [`VizError::AlreadyRunning`] if called while running,
    /// [`VizError::Stopped`] after teardown — stopped sessions never
    /// restart.
    pub fn begin(&mut self, scheduler: &mut impl FrameScheduler) -> VizResult<()> {
        let mut rng = nav_core::VizRng::new(self.config.seed);
        let store = NodeStore::spawn(&self.config, &mut rng);
        self.start(store, scheduler)
    }

    /// Like [`begin`](Self::begin) but with explicitly placed nodes —
    /// deterministic layouts for scenario tests and hosts that position
    /// nodes themselves.  The surface bounds still come from the config.
    pub fn begin_with_nodes(
        &mut self,
        nodes: Vec<NodeState>,
        scheduler: &mut impl FrameScheduler,
    ) -> VizResult<()> {
        let store = NodeStore::from_nodes(nodes, self.config.bounds());
        self.start(store, scheduler)
    }

    fn start(
        &mut self,
        store: NodeStore,
        scheduler: &mut impl FrameScheduler,
    ) -> VizResult<()> {
        match self.phase {
            Phase::Running => return Err(VizError::AlreadyRunning),
            Phase::Stopped => return Err(VizError::Stopped),
            Phase::Uninitialized => {}
        }

        debug!(
            "viz: begin — {} nodes ({} leaders) on {}",
            store.len(),
            store.leader_count(),
            store.bounds()
        );
        self.store = Some(store);
        self.phase = Phase::Running;
        self.pending = Some(scheduler.request());
        Ok(())
    }

    /// One tick: advance → proximity edges → paint → schedule next.
    ///
    /// The host calls this from its frame callback with the handle that
    /// fired.  Handles that are stale (cancelled, superseded, or from a
    /// previous session) are ignored, as is any call outside `Running` —
    /// both make late callbacks after `end()` harmless (scenario: teardown
    /// races an in-flight frame).
    ///
    /// If the surface reports not-ready, the loop transitions to `Stopped`
    /// without drawing and without raising: a decorative visualization
    /// must never error the host page.
    pub fn on_frame<O: VizObserver>(
        &mut self,
        fired: FrameHandle,
        scheduler: &mut impl FrameScheduler,
        observer: &mut O,
    ) {
        if self.phase != Phase::Running || self.pending != Some(fired) {
            return;
        }
        self.pending = None;

        if !self.surface.is_ready() {
            warn!("viz: surface lost at {} — stopping silently", self.frame);
            self.phase = Phase::Stopped;
            self.store = None;
            observer.on_stopped(self.frame);
            return;
        }

        // Running ⇒ the store exists; `start` is the only way in.
        let Some(store) = self.store.as_mut() else {
            return;
        };

        observer.on_frame_start(self.frame);

        store.advance();
        let edges = proximity_edges(store, self.config.proximity_threshold);
        self.painter.paint(&mut self.surface, store, &edges);

        observer.on_frame_end(self.frame, edges.len());

        // Unconditional re-schedule: the loop has no termination condition
        // of its own while running.
        self.pending = Some(scheduler.request());
        self.frame = self.frame.offset(1);
    }

    /// `→ stopped`: cancel the pending callback and discard the Node Store.
    ///
    /// Idempotent from every phase — calling `end` on an already-stopped
    /// (or never-started) visualization has no observable effect.  After
    /// `end` returns, no write to the surface can occur: the handle is
    /// cancelled synchronously and any already-in-flight callback fails the
    /// staleness check in [`on_frame`](Self::on_frame).
    pub fn end(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        if self.phase != Phase::Stopped {
            debug!("viz: end at {} ({})", self.frame, self.phase);
        }
        self.phase = Phase::Stopped;
        self.store = None;
    }

    // ── Test / headless driver ────────────────────────────────────────────

    /// Fire up to `n` frames through a [`ManualScheduler`][crate::ManualScheduler]
    /// — the headless equivalent of `n` display refreshes.
    ///
    /// Stops early if the loop leaves `Running` or nothing is scheduled.
    pub fn run_frames<O: VizObserver>(
        &mut self,
        n: u64,
        scheduler: &mut crate::ManualScheduler,
        observer: &mut O,
    ) {
        for _ in 0..n {
            let Some(handle) = scheduler.fire() else {
                break;
            };
            self.on_frame(handle, scheduler, observer);
            if self.phase != Phase::Running {
                break;
            }
        }
    }
}
