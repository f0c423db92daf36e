//! `swarm-sim` — the external tick driver for the `rust_swarm` framework.
//!
//! The decision core in `swarm-agent` is world-agnostic: it consumes a raw
//! sensor magnitude and transport callbacks, nothing else.  This crate is
//! the scheduler that drives it, with the two world-facing seams left as
//! traits:
//!
//! | Seam           | Trait          | Stands in for                       |
//! |----------------|----------------|-------------------------------------|
//! | light sensing  | [`LightField`] | the arena's light map + photodiode  |
//! | message reach  | [`Topology`]   | radio range and packet loss         |
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..total_ticks:
//!   ① Step     — every agent: sample field → SwarmAgent::step
//!                (parallel with the `parallel` feature).
//!   ② Collect  — poll pending_frame() in ascending agent order.
//!   ③ Deliver  — per frame: checksum_ok → decode → deliver to each
//!                recipient the topology picks (sequential, deterministic).
//!   ④ Observe  — on_tick_end, periodic on_snapshot; stop early once
//!                every agent has decided.
//! ```
//!
//! Delivered frames sit in each agent's single-slot mailbox and are consumed
//! during that agent's *next* step — transport latency of one tick, matching
//! the asynchronous-callback model the mailbox was designed around.

pub mod builder;
pub mod error;
pub mod field;
pub mod observer;
pub mod swarm;
pub mod topology;


pub use builder::SwarmBuilder;
pub use error::{SimError, SimResult};
pub use field::{FillRatioField, LightField};
pub use observer::{NoopObserver, SwarmObserver};
pub use swarm::{RunSummary, Swarm, TickStats};
pub use topology::{FullMesh, LossyMesh, Topology};
