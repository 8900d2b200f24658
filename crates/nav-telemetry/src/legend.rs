//! Canvas legend counts.

/// The agent/leader split shown in the canvas legend overlay.
///
/// Derived from the *displayed* node count with the same 20 % leader share
/// the simulation uses as a probability — so the legend numbers drift with
/// the telemetry walk while the canvas animates a fixed-size swarm.  The
/// mismatch is cosmetic and intentional (see the crate docs).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Legend {
    /// Regular agents: `count − leaders`.
    pub agents: u32,
    /// Leaders: `⌊count · 0.2⌋`.
    pub leaders: u32,
}

impl Legend {
    pub fn from_node_count(count: u32) -> Self {
        let leaders = (f64::from(count) * 0.2).floor() as u32;
        Self { agents: count - leaders, leaders }
    }

    #[inline]
    pub fn total(self) -> u32 {
        self.agents + self.leaders
    }
}
