//! `swarm-core` — foundational types for the `rust_swarm` collective-decision
//! framework.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It intentionally
//! has no `swarm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId` (sim-side index), `PeerId` (wire identity)  |
//! | [`time`]    | `Tick`, `SimClock`                                    |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`shade`]   | `Shade` (binary observation), `LightLevel` (ternary)  |
//! | [`config`]  | `AgentConfig`, `SwarmConfig`                          |
//! | [`error`]   | `SwarmError`, `SwarmResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required for JSON config loading in application crates.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod shade;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentConfig, SwarmConfig};
pub use error::{SwarmError, SwarmResult};
pub use ids::{AgentId, PeerId};
pub use rng::{AgentRng, SimRng};
pub use shade::{LightLevel, Shade};
pub use time::{SimClock, Tick};
