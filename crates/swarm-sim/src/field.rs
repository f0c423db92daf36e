//! The light-sensing seam.

use swarm_core::{AgentId, AgentRng, Tick};

/// Source of raw sensor magnitudes — the stand-in for the arena's light map.
///
/// Implementations receive the sampling agent's own RNG so that stochastic
/// fields stay deterministic per agent regardless of step ordering (the
/// `parallel` feature steps agents on a thread pool).
pub trait LightField: Send + Sync {
    /// The raw magnitude `agent`'s sensor reads at `tick`.
    fn sample(&self, agent: AgentId, tick: Tick, rng: &mut AgentRng) -> u16;
}

// ── FillRatioField ────────────────────────────────────────────────────────────

/// A statistical stand-in for a patterned arena floor: each reading lands in
/// the light band with probability `fill_ratio`, in the ambiguous gray band
/// with probability `gray_prob`, and in the dark band otherwise.
///
/// This models a random-walking agent crossing a black/white pattern whose
/// light fraction is `fill_ratio`, without simulating any geometry.
#[derive(Clone, Debug)]
pub struct FillRatioField {
    /// Fraction of non-gray readings that are light.
    pub fill_ratio: f64,
    /// Chance of an ambiguous reading (arena margin, pattern edge).
    pub gray_prob: f64,
    /// Representative raw magnitudes for the three bands.  Defaults sit
    /// comfortably inside the default classification thresholds.
    pub dark_raw: u16,
    pub gray_raw: u16,
    pub light_raw: u16,
}

impl FillRatioField {
    pub fn new(fill_ratio: f64) -> Self {
        Self {
            fill_ratio,
            gray_prob: 0.0,
            dark_raw: 100,
            gray_raw: 500,
            light_raw: 900,
        }
    }

    /// Same field with an ambiguous-band probability.
    pub fn with_gray_prob(mut self, gray_prob: f64) -> Self {
        self.gray_prob = gray_prob;
        self
    }
}

impl LightField for FillRatioField {
    fn sample(&self, _agent: AgentId, _tick: Tick, rng: &mut AgentRng) -> u16 {
        if rng.gen_bool(self.gray_prob) {
            self.gray_raw
        } else if rng.gen_bool(self.fill_ratio) {
            self.light_raw
        } else {
            self.dark_raw
        }
    }
}
