//! The random-walk telemetry feed.

use nav_core::VizRng;

use crate::Legend;

/// Threat level bounds (inclusive).
pub const THREAT_FLOOR: f64 = 1.0;
pub const THREAT_CEIL: f64 = 5.0;

/// Displayed node count bounds (inclusive).
pub const NODE_COUNT_FLOOR: u32 = 100;
pub const NODE_COUNT_CEIL: u32 = 200;

/// Publishes the dashboard's two jittered gauges.
///
/// Each [`update`](TelemetryFeed::update) applies one random-walk step:
///
/// - threat level: `level + u·2 − 1`, clamped to `[1, 5]` (continuous);
/// - node count: `count + ⌊u·10 − 5⌋`, clamped to `[100, 200]` (integer).
///
/// The host calls `update` on its own timer — the walk is independent of
/// the animation's frame rate and of the simulated swarm.
pub struct TelemetryFeed {
    threat_level: f64,
    node_count: u32,
    rng: VizRng,
}

impl TelemetryFeed {
    /// Start at the reference dashboard's initial readings: threat 3,
    /// 150 displayed nodes.
    ///
    /// Pass a [`VizRng::child`] stream so the feed's draws never perturb
    /// node initialization.
    pub fn new(rng: VizRng) -> Self {
        Self { threat_level: 3.0, node_count: 150, rng }
    }

    /// Advance both gauges by one step.
    pub fn update(&mut self) {
        self.threat_level =
            (self.threat_level + self.rng.jitter(1.0)).clamp(THREAT_FLOOR, THREAT_CEIL);

        let delta = self.rng.jitter(5.0).floor() as i64;
        self.node_count = (i64::from(self.node_count) + delta)
            .clamp(i64::from(NODE_COUNT_FLOOR), i64::from(NODE_COUNT_CEIL))
            as u32;
    }

    /// Current threat level in `[1, 5]`.
    #[inline]
    pub fn threat_level(&self) -> f64 {
        self.threat_level
    }

    /// Currently displayed node count in `[100, 200]`.
    #[inline]
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    /// The canvas legend derived from the displayed count.
    #[inline]
    pub fn legend(&self) -> Legend {
        Legend::from_node_count(self.node_count)
    }
}
