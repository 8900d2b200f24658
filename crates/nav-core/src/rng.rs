//! Deterministic RNG wrapper.
//!
//! # Determinism strategy
//!
//! All randomness in the visualizer flows through `VizRng`, a seeded
//! `SmallRng`.  The same seed always reproduces the same node layout and
//! the same telemetry walk, which is what makes trajectory-level tests
//! possible at all — the host injects the seed, nothing calls an ambient
//! entropy source.
//!
//! Independent consumers (node initialization vs. the telemetry feed) take
//! separate streams derived via [`VizRng::child`]:
//!
//!   child_seed = next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space, so
//! adding a new consumer never disturbs the streams of existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded deterministic RNG for the visualization session.
///
/// The type is `Send` but intentionally not shared — each consumer owns its
/// stream.  The whole core is single-threaded, so no synchronisation exists
/// or is needed.
pub struct VizRng(SmallRng);

impl VizRng {
    pub fn new(seed: u64) -> Self {
        VizRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream — used to decouple the telemetry
    /// feed's randomness from node initialization so neither perturbs the
    /// other's sequence.
    pub fn child(&mut self, offset: u64) -> VizRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        VizRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniform sample in `[-half, half]` — the shape of every jitter in
    /// the visualizer (initial velocities, telemetry walks).
    #[inline]
    pub fn jitter(&mut self, half: f64) -> f64 {
        (self.0.r#gen::<f64>() - 0.5) * 2.0 * half
    }
}
