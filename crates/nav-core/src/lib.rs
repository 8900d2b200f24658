//! `nav-core` — foundational types for the `cogninav` topology visualizer.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `NodeId`                                            |
//! | [`geom`]     | `Vec2`, `Bounds` (surface-space geometry)           |
//! | [`frame`]    | `FrameTick`                                         |
//! | [`rng`]      | `VizRng` (seeded, deterministic)                    |
//! | [`role`]     | `NodeRole` enum                                     |
//! | [`config`]   | `VizConfig` and its sanitization rules              |
//! | [`error`]    | `NavError`, `NavResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod config;
pub mod error;
pub mod frame;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod role;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::VizConfig;
pub use error::{NavError, NavResult};
pub use frame::FrameTick;
pub use geom::{Bounds, Vec2};
pub use ids::NodeId;
pub use rng::VizRng;
pub use role::NodeRole;
