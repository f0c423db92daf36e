//! `swarm-belief` — the statistical core of the `rust_swarm` framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`incbeta`]   | Regularized incomplete beta function (log-domain Lentz)   |
//! | [`evidence`]  | `BeliefModel` — evidence counters + credible-interval rule |
//! | [`neighbors`] | `NeighborTable` — bounded per-peer observation dedup store |
//!
//! # Design notes
//!
//! Evidence flows into one `BeliefModel` per agent from two sources: the
//! agent's own sensor (via the behavior step) and peer reports (via
//! [`NeighborTable::ingest`]).  Both paths call
//! [`BeliefModel::add_evidence`]; the model never knows or cares where a
//! pseudo-observation came from.
//!
//! The decision is a one-way latch.  `evaluate_decision` keeps returning the
//! posterior tail mass for instrumentation after the latch fires, but the
//! stored decision never changes again.

pub mod evidence;
pub mod incbeta;
pub mod neighbors;

#[cfg(test)]
mod tests;

pub use evidence::{BeliefModel, Decision};
pub use incbeta::reg_inc_beta;
pub use neighbors::NeighborTable;
