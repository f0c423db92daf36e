//! `swarm-agent` — the per-tick decision core of one swarm member.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`sensing`]    | Raw-magnitude classifier + interval-gated sampling        |
//! | [`locomotion`] | `RandomWalk` state machine, `MotorCommand`, sensing-safe flag |
//! | [`behavior`]   | `TaskState` — observe / disseminate scheduling            |
//! | [`indicator`]  | `Rgb` status colors (decision + confidence blend)         |
//! | [`agent`]      | `SwarmAgent` — owns everything, runs the tick step        |
//!
//! # The tick contract
//!
//! An external scheduler drives each agent through exactly one
//! [`SwarmAgent::step`] per tick, passing the raw sensor magnitude.  Between
//! steps the transport may push at most one decoded frame through
//! [`SwarmAgent::deliver`] and may poll [`SwarmAgent::pending_frame`] for an
//! outbound broadcast.  Nothing else mutates agent state.

pub mod agent;
pub mod behavior;
pub mod indicator;
pub mod locomotion;
pub mod sensing;


pub use agent::SwarmAgent;
pub use behavior::TaskState;
pub use indicator::Rgb;
pub use locomotion::{MotorCommand, RandomWalk, WalkPhase};
pub use sensing::{SensingGate, classify};
