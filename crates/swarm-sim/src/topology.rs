//! The message-reach seam.

use swarm_core::{AgentId, SimRng};

/// Decides which agents a broadcast frame reaches — the stand-in for radio
/// range, interference, and packet loss.
///
/// Implementations must never include the sender; the runner guards against
/// it anyway.
pub trait Topology: Send + Sync {
    /// Recipients of a broadcast from `sender` in a swarm of `count` agents.
    fn recipients(&self, sender: AgentId, count: usize, rng: &mut SimRng) -> Vec<AgentId>;
}

// ── FullMesh ──────────────────────────────────────────────────────────────────

/// Every frame reaches every other agent.  The densest (and most
/// optimistic) communication regime.
pub struct FullMesh;

impl Topology for FullMesh {
    fn recipients(&self, sender: AgentId, count: usize, _rng: &mut SimRng) -> Vec<AgentId> {
        (0..count as u32)
            .map(AgentId)
            .filter(|&a| a != sender)
            .collect()
    }
}

// ── LossyMesh ─────────────────────────────────────────────────────────────────

/// Full mesh with independent per-link delivery probability — the cheapest
/// way to exercise the fire-and-forget, at-least-once-or-never transport
/// model the statistical core is built to tolerate.
pub struct LossyMesh {
    pub deliver_prob: f64,
}

impl Topology for LossyMesh {
    fn recipients(&self, sender: AgentId, count: usize, rng: &mut SimRng) -> Vec<AgentId> {
        (0..count as u32)
            .map(AgentId)
            .filter(|&a| a != sender && rng.gen_bool(self.deliver_prob))
            .collect()
    }
}
