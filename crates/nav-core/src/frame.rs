//! Frame counter.
//!
//! One tick of the visualization = one host display frame.  The loop does
//! not model elapsed time: the Euler step in `nav-topology` uses unit
//! time-per-frame, so real-time pacing is whatever refresh rate the host
//! delivers.  `FrameTick` exists for observers, logging, and tests — the
//! physics never reads it.

use std::fmt;

/// A monotone per-session frame counter.
///
/// Stored as `u64`: at 240 frames/second a `u64` lasts ~2.4 billion years,
/// so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTick(pub u64);

impl FrameTick {
    pub const ZERO: FrameTick = FrameTick(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> FrameTick {
        FrameTick(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: FrameTick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for FrameTick {
    type Output = FrameTick;
    #[inline]
    fn add(self, rhs: u64) -> FrameTick {
        FrameTick(self.0 + rhs)
    }
}

impl std::ops::Sub for FrameTick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: FrameTick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for FrameTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
