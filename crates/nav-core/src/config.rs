//! Visualization configuration and its sanitization rules.
//!
//! The visualizer is decorative: bad input must never crash the host page.
//! Every field therefore has a clamp-to-safe-value rule applied by
//! [`VizConfig::sanitized`] rather than a validation error.  A config that
//! sanitizes to "zero nodes on a zero-sized surface" still produces a valid,
//! running (if vacuous) visualization.

use crate::geom::Bounds;

/// Parameters the host supplies at mount time.
///
/// Typically built with [`VizConfig::default`] and a struct update, or
/// deserialized from a host config file with the `serde` feature.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VizConfig {
    /// Drawing surface width in pixels.
    pub width: f32,

    /// Drawing surface height in pixels.
    pub height: f32,

    /// Number of simulated nodes.  Fixed for the session.  Default: 20.
    pub node_count: usize,

    /// Edge-drawing distance threshold in surface units (strict `<`).
    /// Default: 100.
    pub proximity_threshold: f32,

    /// Probability that a node is created as a leader.  Default: 0.2.
    pub leader_probability: f64,

    /// Node radius is drawn uniformly from `[radius_min, radius_max]`.
    /// Defaults: 2 and 5.  Used only for rendering.
    pub radius_min: f32,
    pub radius_max: f32,

    /// Velocity components are drawn uniformly from `[-max_speed, max_speed]`
    /// (per axis, in surface units per frame).  Default: 1.
    pub max_speed: f32,

    /// Master RNG seed.  The same seed always produces the same layout.
    pub seed: u64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            node_count: 20,
            proximity_threshold: 100.0,
            leader_probability: 0.2,
            radius_min: 2.0,
            radius_max: 5.0,
            max_speed: 1.0,
            seed: 42,
        }
    }
}

impl VizConfig {
    /// The surface rectangle described by `width`/`height`.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Copy with every field clamped to a safe value.
    ///
    /// | Field                 | Rule                                     |
    /// |-----------------------|------------------------------------------|
    /// | `width`, `height`     | non-finite or negative → 0               |
    /// | `proximity_threshold` | non-finite or negative → 0 (no edges)    |
    /// | `leader_probability`  | clamped to `[0, 1]`, NaN → 0             |
    /// | `radius_min/max`      | non-finite/negative → 0; inverted range  |
    /// |                       | collapsed to `radius_min`                |
    /// | `max_speed`           | non-finite or negative → 0 (static swarm)|
    ///
    /// `node_count` is unsigned, so "non-positive count → empty store" is
    /// already structural; `0` passes through untouched.
    pub fn sanitized(&self) -> Self {
        let sane = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };

        let radius_min = sane(self.radius_min);
        let radius_max = sane(self.radius_max).max(radius_min);

        Self {
            width: sane(self.width),
            height: sane(self.height),
            node_count: self.node_count,
            proximity_threshold: sane(self.proximity_threshold),
            leader_probability: if self.leader_probability.is_nan() {
                0.0
            } else {
                self.leader_probability.clamp(0.0, 1.0)
            },
            radius_min,
            radius_max,
            max_speed: sane(self.max_speed),
            seed: self.seed,
        }
    }
}
