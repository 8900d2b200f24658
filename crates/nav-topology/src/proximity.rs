//! Per-frame proximity-graph computation.
//!
//! # Scaling note
//!
//! The scan enumerates all unordered node pairs — O(N²) distance checks per
//! frame.  At the reference scale (N = 20, i.e. 190 pairs) this is far
//! cheaper than the draw calls it feeds.  It does NOT scale past a few
//! hundred nodes; anything larger needs a spatial index (uniform grid or
//! k-d tree) to cut the candidate set first.  That is an extension point,
//! deliberately not built here.

use nav_core::NodeId;

use crate::NodeStore;

/// One edge of the current frame's proximity graph.
///
/// Edges are transient derived values: recomputed from scratch every frame,
/// never stored across frames, carrying no identity beyond their endpoints.
/// `a < b` by index, so each unordered pair appears exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    /// Euclidean distance between the endpoints at computation time.
    pub distance: f32,
}

/// Compute the proximity graph: every unordered pair of distinct nodes
/// closer than `threshold`.
///
/// The comparison is strict — a pair at exactly `threshold` apart produces
/// no edge.  Distances are compared squared so `sqrt` is only paid for
/// pairs that actually form an edge.
pub fn proximity_edges(store: &NodeStore, threshold: f32) -> Vec<Edge> {
    // A non-positive (or NaN) threshold admits no pair; squaring it would
    // silently re-admit them.
    if !(threshold > 0.0) {
        return Vec::new();
    }

    let nodes = store.nodes();
    let threshold_sq = threshold * threshold;

    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let d_sq = nodes[i].position.distance_sq(nodes[j].position);
            if d_sq < threshold_sq {
                edges.push(Edge {
                    a: NodeId(i as u32),
                    b: NodeId(j as u32),
                    distance: d_sq.sqrt(),
                });
            }
        }
    }
    edges
}
