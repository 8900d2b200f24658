//! Frame scheduling — the host's per-frame callback service.
//!
//! Browsers call this requestAnimationFrame; native hosts have a vsync or
//! timer equivalent.  The loop only needs two operations: request one
//! callback, cancel one callback.  Everything else (pacing, coalescing,
//! background throttling) belongs to the host.

/// Token for one scheduled frame callback.
///
/// Compared by value: the loop keeps the handle it was issued and ignores
/// any fired handle that doesn't match, so cancelled or superseded
/// callbacks that still fire are no-ops.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FrameHandle(pub u64);

impl std::fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FrameHandle({})", self.0)
    }
}

/// The host's frame-callback service.
///
/// # Contract
///
/// - `request` returns a handle that has not been issued before in this
///   scheduler's lifetime (handles are never reused).
/// - `cancel` with a handle that already fired or was already cancelled is
///   a no-op — teardown must be unconditional and idempotent.
pub trait FrameScheduler {
    /// Schedule one callback for the next frame.
    fn request(&mut self) -> FrameHandle;

    /// Revoke a previously requested callback so it never fires.
    fn cancel(&mut self, handle: FrameHandle);
}

// ── ManualScheduler ───────────────────────────────────────────────────────────

/// Deterministic in-process [`FrameScheduler`] for tests and headless runs.
///
/// Holds at most one pending callback (all the loop ever requests) and
/// fires it only when the driver says so — each [`fire`](Self::fire) is one
/// display refresh.
#[derive(Default)]
pub struct ManualScheduler {
    next_handle: u64,
    pending: Option<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver the pending callback, handing its handle to the caller.
    ///
    /// Returns `None` when nothing is scheduled (loop stopped or not yet
    /// begun).
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// The currently scheduled callback, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Total callbacks ever requested.
    pub fn request_count(&self) -> u64 {
        self.requested
    }

    /// Total callbacks revoked before firing.
    pub fn cancel_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&mut self) -> FrameHandle {
        self.next_handle += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
