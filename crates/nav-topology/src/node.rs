//! Per-node simulation state.

use nav_core::{NodeRole, Vec2};

/// The full state of a single simulated node.
///
/// `position` and `velocity` change every frame; `radius` and `role` are
/// fixed at creation.  Velocity magnitude is constant for the whole session
/// — boundary contact only flips a component's sign.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    /// Surface-space position.  Stays inside the surface rectangle except
    /// for at most one frame immediately after a boundary crossing (the
    /// bounce rule corrects on the next step).
    pub position: Vec2,

    /// Per-frame displacement, each component in `[-max_speed, max_speed]`.
    pub velocity: Vec2,

    /// Render radius in `[radius_min, radius_max]`.  Rendering only — nodes
    /// have no collision extent.
    pub radius: f32,

    /// Leader or follower.  Controls fill color and the leader outline.
    pub role: NodeRole,
}

impl NodeState {
    /// Construct a stationary follower at `position` — the building block
    /// scenario tests start from.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius: 3.0,
            role: NodeRole::Follower,
        }
    }

    /// Copy with `velocity` replaced.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Copy with `role` replaced.
    pub fn with_role(mut self, role: NodeRole) -> Self {
        self.role = role;
        self
    }
}
