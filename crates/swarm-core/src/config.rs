//! Agent and swarm configuration.
//!
//! # Design
//!
//! Everything a test harness varies between trials lives in these two
//! immutable structs, passed at construction.  Runtime state (evidence
//! counters, state machines, neighbor slots) lives in the component types
//! that consume them — configuration is never mutated after a swarm is
//! built.
//!
//! All durations are whole ticks.  The documented defaults assume the
//! default clock rate of 32 ticks per simulated second.

use crate::error::{SwarmError, SwarmResult};
use crate::time::SimClock;

// ── AgentConfig ───────────────────────────────────────────────────────────────

/// Per-agent parameters, identical for every member of a swarm.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Pseudo-count added to the light tally (Beta α prior).  1 with
    /// `dark_prior` 1 is the uniform prior.
    pub light_prior: u32,

    /// Pseudo-count added to the dark tally (Beta β prior).
    pub dark_prior: u32,

    /// Posterior mass that must sit on one side of 0.5 before the agent
    /// commits to a decision.  Must be strictly between 0 and 1.
    pub credible_threshold: f64,

    /// Once decided, broadcast the fixed decision instead of the latest raw
    /// observation.  The dominant lever for convergence speed versus
    /// premature-commitment risk.
    pub use_positive_feedback: bool,

    /// Observe and disseminate in the same tick.  When `false` the agent
    /// alternates: each fresh observation opens a dissemination window of
    /// `disseminate_ticks` before observation resumes.
    pub allow_simultaneity: bool,

    /// Minimum ticks between accepted sensor samples.
    pub observe_interval_ticks: u64,

    /// Length of the dissemination window in non-simultaneous mode.
    pub disseminate_ticks: u64,

    /// Age (ticks since FIRST contact) past which a neighbor-table entry is
    /// discarded.  Default: 900 s at 32 ticks/s.
    pub neighbor_timeout_ticks: u64,

    /// Fixed neighbor-table capacity.  Bounded memory: the table never
    /// allocates after construction.
    pub neighbor_capacity: usize,

    /// Raw sensor magnitudes strictly below this read as dark.
    pub dark_ceiling: u16,

    /// Raw sensor magnitudes at or above this read as light; the band
    /// between `dark_ceiling` and this value is the ambiguous gray zone.
    pub light_floor: u16,

    /// Mean of the exponential straight-phase duration of the random walk.
    /// Default: 240 s at 32 ticks/s.
    pub rw_mean_straight_ticks: u64,

    /// Upper bound of the uniform turn-phase duration.  Default: 12 s at
    /// 32 ticks/s.
    pub rw_max_turn_ticks: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        let sec = SimClock::DEFAULT_TICKS_PER_SEC as u64;
        Self {
            light_prior: 1,
            dark_prior: 1,
            credible_threshold: 0.95,
            use_positive_feedback: true,
            allow_simultaneity: true,
            observe_interval_ticks: sec,
            disseminate_ticks: 30 * sec,
            neighbor_timeout_ticks: 900 * sec,
            neighbor_capacity: 100,
            dark_ceiling: 250,
            light_floor: 750,
            rw_mean_straight_ticks: 240 * sec,
            rw_max_turn_ticks: 12 * sec,
        }
    }
}

impl AgentConfig {
    /// Check the structural invariants the components rely on.
    pub fn validate(&self) -> SwarmResult<()> {
        if !(self.credible_threshold > 0.0 && self.credible_threshold < 1.0) {
            return Err(SwarmError::Config(format!(
                "credible_threshold must be in (0, 1), got {}",
                self.credible_threshold
            )));
        }
        if self.light_prior == 0 || self.dark_prior == 0 {
            return Err(SwarmError::Config(
                "priors must be at least 1 pseudo-count (Beta shape parameters must be positive)"
                    .into(),
            ));
        }
        if self.neighbor_capacity == 0 {
            return Err(SwarmError::Config(
                "neighbor_capacity must be non-zero".into(),
            ));
        }
        if self.dark_ceiling >= self.light_floor {
            return Err(SwarmError::Config(format!(
                "dark_ceiling ({}) must be below light_floor ({})",
                self.dark_ceiling, self.light_floor
            )));
        }
        if self.observe_interval_ticks == 0 {
            return Err(SwarmError::Config(
                "observe_interval_ticks must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

// ── SwarmConfig ───────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// `SwarmBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwarmConfig {
    /// Parameters shared by every agent.
    pub agent: AgentConfig,

    /// Number of agents in the swarm.  Capped at `u16::MAX - 1` so every
    /// agent gets a distinct non-zero `PeerId`.
    pub num_agents: usize,

    /// Total ticks to simulate (exclusive upper bound).  Runs may end
    /// earlier if every agent decides.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks per simulated second, for duration reporting.
    pub ticks_per_sec: u32,

    /// Emit a telemetry snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            agent: AgentConfig::default(),
            num_agents: 32,
            total_ticks: 0,
            seed: 0,
            ticks_per_sec: SimClock::DEFAULT_TICKS_PER_SEC,
            snapshot_interval_ticks: 0,
        }
    }
}

impl SwarmConfig {
    /// Check run-level invariants, including the nested agent config.
    pub fn validate(&self) -> SwarmResult<()> {
        self.agent.validate()?;
        if self.num_agents == 0 {
            return Err(SwarmError::Config("num_agents must be non-zero".into()));
        }
        if self.num_agents >= u16::MAX as usize {
            return Err(SwarmError::Config(format!(
                "num_agents ({}) exceeds the 16-bit peer identity space",
                self.num_agents
            )));
        }
        if self.ticks_per_sec == 0 {
            return Err(SwarmError::Config("ticks_per_sec must be non-zero".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.ticks_per_sec)
    }
}
