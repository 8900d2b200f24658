//! Node role tags.

use std::fmt;

/// The two mutually exclusive role tags a node carries for its lifetime.
///
/// Role controls only how a node is rendered (fill color, leader outline);
/// motion and proximity are role-blind.  Assigned once at initialization,
/// never mutated afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeRole {
    /// Regular swarm member.
    #[default]
    Follower,
    /// Distinguished node, drawn with an outline.
    Leader,
}

impl NodeRole {
    #[inline]
    pub fn is_leader(self) -> bool {
        matches!(self, NodeRole::Leader)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Follower => write!(f, "follower"),
            NodeRole::Leader => write!(f, "leader"),
        }
    }
}
