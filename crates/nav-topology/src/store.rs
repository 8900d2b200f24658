//! The `NodeStore` — fixed-size, session-scoped node collection.

use nav_core::{Bounds, NodeId, NodeRole, Vec2, VizConfig, VizRng};

use crate::NodeState;

/// Owns every node for one visualization session.
///
/// The collection is ordered and fixed-size: no node is added or removed
/// after creation, and iteration order is stable, which lets the proximity
/// scan enumerate unordered pairs as `(i, j), i < j` without deduplication.
///
/// Mutation goes through [`advance`](NodeStore::advance) only; external
/// crates get read-only views.
pub struct NodeStore {
    pub(crate) nodes: Vec<NodeState>,
    pub(crate) bounds: Bounds,
}

impl NodeStore {
    /// Populate a store from `config` using the injected RNG stream.
    ///
    /// Per node, in sampling order: `position.x ∈ [0, W)`, `position.y ∈
    /// [0, H)`, velocity components in `[-max_speed, max_speed]`, radius in
    /// `[radius_min, radius_max)`, leader with `leader_probability` — all
    /// uniform and independent.  `node_count == 0` yields an empty but valid
    /// store; the config is sanitized first so no input can make this fail.
    pub fn spawn(config: &VizConfig, rng: &mut VizRng) -> Self {
        let cfg = config.sanitized();
        let bounds = cfg.bounds();

        // Positions sample as `u * extent` with `u ∈ [0, 1)` so a zero-sized
        // surface degenerates to the origin instead of an empty range.
        let nodes = (0..cfg.node_count)
            .map(|_| {
                let position = Vec2::new(
                    rng.random::<f32>() * bounds.width,
                    rng.random::<f32>() * bounds.height,
                );
                let velocity = Vec2::new(
                    rng.jitter(cfg.max_speed as f64) as f32,
                    rng.jitter(cfg.max_speed as f64) as f32,
                );
                let radius =
                    cfg.radius_min + rng.random::<f32>() * (cfg.radius_max - cfg.radius_min);
                let role = if rng.gen_bool(cfg.leader_probability) {
                    NodeRole::Leader
                } else {
                    NodeRole::Follower
                };
                NodeState { position, velocity, radius, role }
            })
            .collect();

        Self { nodes, bounds }
    }

    /// Build a store from explicit nodes — deterministic layouts for
    /// scenario tests and hosts that place nodes themselves.
    pub fn from_nodes(nodes: Vec<NodeState>, bounds: Bounds) -> Self {
        Self { nodes, bounds: bounds.clamped() }
    }

    /// Number of nodes.  Constant for the store's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if there are no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The surface rectangle nodes bounce inside.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Read-only view of all nodes, indexable by `NodeId::index()`.
    #[inline]
    pub fn nodes(&self) -> &[NodeState] {
        &self.nodes
    }

    /// The node with `id`, or `None` if out of range.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.get(id.index())
    }

    /// Iterator over all `NodeId`s in ascending index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// How many nodes carry the leader role.
    pub fn leader_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.role.is_leader()).count()
    }

    /// How many nodes carry the follower role.
    pub fn follower_count(&self) -> usize {
        self.nodes.len() - self.leader_count()
    }
}
