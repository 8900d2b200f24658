//! Frame painter: edges first, then nodes.

use nav_topology::{Edge, NodeStore};

use crate::{Color, Surface};

/// Stroke and fill styles for one frame.
///
/// The defaults reproduce the reference look: translucent blue edges at a
/// fixed opacity (no distance-based falloff), blue followers, red leaders
/// with an amber outline.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStyle {
    pub edge_stroke: Color,
    pub edge_width: f32,
    pub follower_fill: Color,
    pub leader_fill: Color,
    pub leader_outline: Color,
    pub leader_outline_width: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            // 30 % alpha over the same blue as the follower fill.
            edge_stroke: Color::rgb(0x3b, 0x82, 0xf6).with_alpha(77),
            edge_width: 1.0,
            follower_fill: Color::rgb(0x3b, 0x82, 0xf6),
            leader_fill: Color::rgb(0xef, 0x44, 0x44),
            leader_outline: Color::rgb(0xfb, 0xbf, 0x24),
            leader_outline_width: 2.0,
        }
    }
}

/// Draws one frame of the topology onto any [`Surface`].
#[derive(Clone, Debug, Default)]
pub struct Painter {
    pub style: FrameStyle,
}

impl Painter {
    pub fn new(style: FrameStyle) -> Self {
        Self { style }
    }

    /// Paint the current frame: clear, all edges, then all nodes.
    ///
    /// The edge-before-node order is a contract, not a choice of
    /// convenience — nodes must render on top so that overlapping edges
    /// never visually obscure them.
    pub fn paint<S: Surface>(&self, surface: &mut S, store: &NodeStore, edges: &[Edge]) {
        surface.clear(store.bounds());

        let nodes = store.nodes();
        for edge in edges {
            surface.stroke_line(
                nodes[edge.a.index()].position,
                nodes[edge.b.index()].position,
                self.style.edge_stroke,
                self.style.edge_width,
            );
        }

        for node in nodes {
            let fill = if node.role.is_leader() {
                self.style.leader_fill
            } else {
                self.style.follower_fill
            };
            surface.fill_circle(node.position, node.radius, fill);
            if node.role.is_leader() {
                surface.stroke_circle(
                    node.position,
                    node.radius,
                    self.style.leader_outline,
                    self.style.leader_outline_width,
                );
            }
        }
    }
}
