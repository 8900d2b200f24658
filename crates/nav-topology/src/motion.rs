//! Motion integration and boundary collision.

use crate::NodeStore;

impl NodeStore {
    /// Advance every node by one frame: Euler step, then reflective bounce.
    ///
    /// The step is `position += velocity` at unit time-per-frame, followed
    /// by an independent per-axis check: if the *updated* coordinate left
    /// `[0, width]` (resp. `[0, height]`), that velocity component's sign is
    /// flipped.  The position is not clamped, so a node can sit up to one
    /// step outside the surface for a single frame before the flipped
    /// velocity carries it back — an accepted approximation for a
    /// decorative animation, not a bug.
    ///
    /// Nodes have no collision extent against each other and may overlap.
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        for node in &mut self.nodes {
            node.position += node.velocity;

            if node.position.x < 0.0 || node.position.x > bounds.width {
                node.velocity.x = -node.velocity.x;
            }
            if node.position.y < 0.0 || node.position.y > bounds.height {
                node.velocity.y = -node.velocity.y;
            }
        }
    }
}
