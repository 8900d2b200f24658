//! dashboard — headless demo of the cogninav topology visualizer.
//!
//! Drives the full stack the way the dashboard shell would: mounts the
//! visualization over a recording surface, fires a fixed number of frames,
//! advances the telemetry feed on its own cadence, then prints the module
//! cards, the status board, and a final node table.

use anyhow::Result;

use nav_core::{FrameTick, NavError, NavResult, VizConfig, VizRng};
use nav_render::RecordingSurface;
use nav_telemetry::{StatusBoard, TelemetryFeed, threat_severity};
use nav_viz::{ManualScheduler, Visualization, VizObserver};

// ── Embedded run configuration ────────────────────────────────────────────────

// The shell would load this from its deployment config; the demo embeds it.
const CONFIG_JSON: &str = r#"{
    "viz": {
        "width": 600.0,
        "height": 300.0,
        "node_count": 20,
        "seed": 42
    },
    "frames": 300,
    "telemetry_updates": 10
}"#;

#[derive(serde::Deserialize)]
struct DashboardConfig {
    #[serde(default)]
    viz: VizConfig,
    frames: u64,
    telemetry_updates: u32,
}

fn load_config(json: &str) -> NavResult<DashboardConfig> {
    serde_json::from_str(json).map_err(|e| NavError::Parse(e.to_string()))
}

// ── Frame statistics observer ─────────────────────────────────────────────────

#[derive(Default)]
struct FrameStats {
    frames: u64,
    edges_total: usize,
    edges_max: usize,
}

impl VizObserver for FrameStats {
    fn on_frame_end(&mut self, _frame: FrameTick, edges_drawn: usize) {
        self.frames += 1;
        self.edges_total += edges_drawn;
        self.edges_max = self.edges_max.max(edges_drawn);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    // 1. Load the run configuration.
    let config = load_config(CONFIG_JSON)?;

    println!("=== COGNINAV dashboard — topology demo ===");
    println!(
        "Nodes: {}  |  Surface: {:.0}×{:.0}  |  Frames: {}  |  Seed: {}",
        config.viz.node_count, config.viz.width, config.viz.height, config.frames, config.viz.seed
    );
    println!();

    // 2. Mount the visualization over a recording surface.
    let mut sched = ManualScheduler::new();
    let mut viz = Visualization::new(config.viz.clone(), RecordingSurface::new());
    viz.begin(&mut sched)?;

    // 3. Run the animation.
    let mut stats = FrameStats::default();
    viz.run_frames(config.frames, &mut sched, &mut stats);

    // 4. Advance the telemetry feed on its own (simulated) interval.
    let mut feed = TelemetryFeed::new(VizRng::new(config.viz.seed).child(1));
    for _ in 0..config.telemetry_updates {
        feed.update();
    }
    let board = StatusBoard::new();

    // 5. Animation summary.
    println!(
        "Animation: {} frames, {} edges total (max {}/frame, mean {:.1})",
        stats.frames,
        stats.edges_total,
        stats.edges_max,
        stats.edges_total as f64 / stats.frames.max(1) as f64
    );
    {
        let surface = viz.surface();
        println!(
            "Draw calls: {} clears, {} lines, {} fills, {} outlines",
            surface.clear_count(),
            surface.line_count(),
            surface.fill_circle_count(),
            surface.stroke_circle_count()
        );
    }
    println!();

    // 6. Header gauges + legend.
    let legend = feed.legend();
    println!(
        "Threat level: {:.1}/5 ({:?})",
        feed.threat_level(),
        threat_severity(feed.threat_level())
    );
    println!(
        "Legend: {} agents, {} leaders (displayed count {})",
        legend.agents,
        legend.leaders,
        feed.node_count()
    );
    println!();

    // 7. Module cards.
    println!("{:<20} {:<8} metrics", "Module", "Status");
    println!("{}", "-".repeat(64));
    for (module, status) in board.iter() {
        let metrics = module.metrics(&feed);
        println!("{:<20} {:<8} {}", module.name(), status.to_string(), metrics.join("  |  "));
    }
    println!();

    // 8. Final node table.
    if let Some(store) = viz.store() {
        println!("{:<6} {:<16} {:<16} {:<8} {:<8}", "Node", "Position", "Velocity", "Radius", "Role");
        println!("{}", "-".repeat(60));
        for (i, node) in store.nodes().iter().enumerate() {
            println!(
                "{:<6} {:<16} {:<16} {:<8.2} {:<8}",
                i,
                node.position.to_string(),
                node.velocity.to_string(),
                node.radius,
                node.role.to_string(),
            );
        }
        println!(
            "\n{} leaders / {} followers simulated (fixed for the session)",
            store.leader_count(),
            store.follower_count()
        );
    }

    // 9. Unmount.
    viz.end(&mut sched);
    println!("\nSession ended cleanly at {}", viz.frame());

    Ok(())
}
