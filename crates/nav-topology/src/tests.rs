//! Unit tests for nav-topology.

use nav_core::{Bounds, NodeId, NodeRole, Vec2, VizConfig, VizRng};

use crate::{NodeState, NodeStore, proximity_edges};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reference_bounds() -> Bounds {
    Bounds::new(600.0, 300.0)
}

fn spawn_default(seed: u64) -> NodeStore {
    let cfg = VizConfig { seed, ..VizConfig::default() };
    let mut rng = VizRng::new(cfg.seed);
    NodeStore::spawn(&cfg, &mut rng)
}

// ── Initialization ────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn {
    use super::*;

    #[test]
    fn count_matches_config() {
        let store = spawn_default(42);
        assert_eq!(store.len(), 20);
        assert!(!store.is_empty());
    }

    #[test]
    fn zero_count_yields_empty_valid_store() {
        let cfg = VizConfig { node_count: 0, ..VizConfig::default() };
        let mut rng = VizRng::new(cfg.seed);
        let store = NodeStore::spawn(&cfg, &mut rng);
        assert!(store.is_empty());
        assert_eq!(store.leader_count(), 0);
    }

    #[test]
    fn positions_inside_surface() {
        let store = spawn_default(1);
        let b = store.bounds();
        for node in store.nodes() {
            assert!((0.0..b.width).contains(&node.position.x), "{}", node.position);
            assert!((0.0..b.height).contains(&node.position.y), "{}", node.position);
        }
    }

    #[test]
    fn velocities_within_speed_range() {
        let store = spawn_default(2);
        for node in store.nodes() {
            assert!((-1.0..=1.0).contains(&node.velocity.x));
            assert!((-1.0..=1.0).contains(&node.velocity.y));
        }
    }

    #[test]
    fn radii_within_range() {
        let store = spawn_default(3);
        for node in store.nodes() {
            assert!((2.0..=5.0).contains(&node.radius), "got {}", node.radius);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = spawn_default(77);
        let b = spawn_default(77);
        assert_eq!(a.nodes(), b.nodes());
    }

    #[test]
    fn different_seed_different_layout() {
        let a = spawn_default(77);
        let b = spawn_default(78);
        assert_ne!(a.nodes(), b.nodes());
    }

    #[test]
    fn leader_probability_extremes() {
        let all = VizConfig { leader_probability: 1.0, node_count: 50, ..VizConfig::default() };
        let none = VizConfig { leader_probability: 0.0, node_count: 50, ..VizConfig::default() };
        let mut rng = VizRng::new(9);
        assert_eq!(NodeStore::spawn(&all, &mut rng).leader_count(), 50);
        assert_eq!(NodeStore::spawn(&none, &mut rng).leader_count(), 0);
    }

    #[test]
    fn get_and_ids_agree_with_order() {
        let store = spawn_default(8);
        let ids: Vec<NodeId> = store.node_ids().collect();
        assert_eq!(ids.len(), store.len());
        for id in ids {
            assert_eq!(store.get(id).unwrap(), &store.nodes()[id.index()]);
        }
        assert!(store.get(NodeId(999)).is_none());
    }

    #[test]
    fn zero_sized_surface_degenerates_to_origin() {
        let cfg = VizConfig { width: 0.0, height: 0.0, ..VizConfig::default() };
        let mut rng = VizRng::new(4);
        let store = NodeStore::spawn(&cfg, &mut rng);
        for node in store.nodes() {
            assert_eq!(node.position, Vec2::ZERO);
        }
    }
}

// ── Motion & boundary collision ───────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn euler_step_adds_velocity() {
        let node = NodeState::at(Vec2::new(10.0, 20.0)).with_velocity(Vec2::new(0.5, -0.25));
        let mut store = NodeStore::from_nodes(vec![node], reference_bounds());
        store.advance();
        assert_eq!(store.nodes()[0].position, Vec2::new(10.5, 19.75));
        assert_eq!(store.nodes()[0].velocity, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn bounce_flips_velocity_after_crossing() {
        // Starts at the left edge moving left.
        let a = NodeState::at(Vec2::new(0.0, 150.0)).with_velocity(Vec2::new(-1.0, 0.0));
        let mut store = NodeStore::from_nodes(vec![a], reference_bounds());

        store.advance();
        // One step outside, velocity already corrected.
        assert_eq!(store.nodes()[0].position, Vec2::new(-1.0, 150.0));
        assert_eq!(store.nodes()[0].velocity, Vec2::new(1.0, 0.0));

        store.advance();
        // Back on the surface, travelling right.
        assert_eq!(store.nodes()[0].position, Vec2::new(0.0, 150.0));
        assert_eq!(store.nodes()[0].velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn axes_bounce_independently() {
        let corner = NodeState::at(Vec2::new(599.5, 299.5)).with_velocity(Vec2::new(1.0, 1.0));
        let mut store = NodeStore::from_nodes(vec![corner], reference_bounds());
        store.advance();
        assert_eq!(store.nodes()[0].velocity, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn node_on_edge_does_not_flip() {
        // Exactly on the boundary is inside the closed interval.
        let node = NodeState::at(Vec2::new(599.0, 150.0)).with_velocity(Vec2::new(1.0, 0.0));
        let mut store = NodeStore::from_nodes(vec![node], reference_bounds());
        store.advance();
        assert_eq!(store.nodes()[0].position.x, 600.0);
        assert_eq!(store.nodes()[0].velocity.x, 1.0, "x == width is not outside");
    }

    /// A node never drifts further than one step outside the surface.
    #[test]
    fn positions_stay_within_one_step_of_surface() {
        let mut store = spawn_default(123);
        let b = store.bounds();
        for _ in 0..10_000 {
            store.advance();
            for node in store.nodes() {
                let (vx, vy) = (node.velocity.x.abs(), node.velocity.y.abs());
                assert!(
                    node.position.x >= -vx && node.position.x <= b.width + vx,
                    "x drifted: {} (|vx| {})",
                    node.position.x,
                    vx
                );
                assert!(
                    node.position.y >= -vy && node.position.y <= b.height + vy,
                    "y drifted: {} (|vy| {})",
                    node.position.y,
                    vy
                );
            }
        }
    }

    /// Roles are immutable across ticks.
    #[test]
    fn roles_never_change() {
        let mut store = spawn_default(5);
        let before: Vec<NodeRole> = store.nodes().iter().map(|n| n.role).collect();
        for _ in 0..500 {
            store.advance();
        }
        let after: Vec<NodeRole> = store.nodes().iter().map(|n| n.role).collect();
        assert_eq!(before, after);
    }

    /// Store size is constant under advancing (the lifecycle half of this
    /// guarantee lives in nav-viz).
    #[test]
    fn advance_preserves_count() {
        let mut store = spawn_default(6);
        for _ in 0..100 {
            store.advance();
            assert_eq!(store.len(), 20);
        }
    }
}

// ── Proximity graph ───────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use super::*;

    fn pair_at_distance(d: f32) -> NodeStore {
        let a = NodeState::at(Vec2::new(0.0, 150.0));
        let b = NodeState::at(Vec2::new(d, 150.0));
        NodeStore::from_nodes(vec![a, b], reference_bounds())
    }

    #[test]
    fn close_pair_forms_edge() {
        let store = pair_at_distance(51.0);
        let edges = proximity_edges(&store, 100.0);
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].a, edges[0].b), (NodeId(0), NodeId(1)));
        assert!((edges[0].distance - 51.0).abs() < 1e-4);
    }

    /// Distance exactly at the threshold draws no edge.
    #[test]
    fn threshold_is_strict() {
        let store = pair_at_distance(100.0);
        assert!(proximity_edges(&store, 100.0).is_empty());
        let store = pair_at_distance(99.999);
        assert_eq!(proximity_edges(&store, 100.0).len(), 1);
    }

    /// The graph is undirected — swapping the store order flips ids but
    /// yields the same pair set and distances.
    #[test]
    fn edges_are_symmetric() {
        let a = NodeState::at(Vec2::new(10.0, 10.0));
        let b = NodeState::at(Vec2::new(40.0, 50.0));
        let fwd = NodeStore::from_nodes(vec![a.clone(), b.clone()], reference_bounds());
        let rev = NodeStore::from_nodes(vec![b, a], reference_bounds());

        let e1 = proximity_edges(&fwd, 100.0);
        let e2 = proximity_edges(&rev, 100.0);
        assert_eq!(e1.len(), 1);
        assert_eq!(e2.len(), 1);
        assert_eq!(e1[0].distance, e2[0].distance);
    }

    #[test]
    fn each_unordered_pair_appears_once() {
        // Three mutually close nodes → exactly 3 edges, all with a < b.
        let nodes = vec![
            NodeState::at(Vec2::new(0.0, 0.0)),
            NodeState::at(Vec2::new(10.0, 0.0)),
            NodeState::at(Vec2::new(0.0, 10.0)),
        ];
        let store = NodeStore::from_nodes(nodes, reference_bounds());
        let edges = proximity_edges(&store, 100.0);
        assert_eq!(edges.len(), 3);
        for e in &edges {
            assert!(e.a < e.b);
        }
    }

    #[test]
    fn empty_and_singleton_stores_have_no_edges() {
        let empty = NodeStore::from_nodes(vec![], reference_bounds());
        assert!(proximity_edges(&empty, 100.0).is_empty());
        let one = NodeStore::from_nodes(
            vec![NodeState::at(Vec2::new(5.0, 5.0))],
            reference_bounds(),
        );
        assert!(proximity_edges(&one, 100.0).is_empty());
    }

    #[test]
    fn non_positive_threshold_yields_no_edges() {
        let store = pair_at_distance(1.0);
        assert!(proximity_edges(&store, 0.0).is_empty());
        assert!(proximity_edges(&store, -100.0).is_empty());
        assert!(proximity_edges(&store, f32::NAN).is_empty());
    }

    /// Bounce and edge in the same tick, end-to-end at the store level.
    #[test]
    fn bounce_and_edge_in_one_tick() {
        let a = NodeState::at(Vec2::new(0.0, 150.0)).with_velocity(Vec2::new(-1.0, 0.0));
        let b = NodeState::at(Vec2::new(50.0, 150.0));
        let mut store = NodeStore::from_nodes(vec![a, b], reference_bounds());

        store.advance();

        assert_eq!(store.nodes()[0].position, Vec2::new(-1.0, 150.0));
        assert_eq!(store.nodes()[0].velocity, Vec2::new(1.0, 0.0));

        let edges = proximity_edges(&store, 100.0);
        assert_eq!(edges.len(), 1);
        assert!((edges[0].distance - 51.0).abs() < 1e-4);
    }
}
