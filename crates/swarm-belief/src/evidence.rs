//! `BeliefModel` — the Beta-posterior evidence accumulator and its
//! credible-interval decision rule.

use std::fmt;

use swarm_core::{AgentConfig, Shade};

use crate::incbeta::reg_inc_beta;

// ── Decision ──────────────────────────────────────────────────────────────────

/// The agent's classification of the ambient feature.
///
/// Starts `Undecided` and latches to `Dark` or `Light` exactly once.
/// Evidence keeps accumulating after the latch fires but can never flip or
/// clear a made decision.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Decision {
    #[default]
    Undecided,
    Dark,
    Light,
}

impl Decision {
    #[inline]
    pub fn is_decided(self) -> bool {
        self != Decision::Undecided
    }

    /// The decided shade, if any.
    #[inline]
    pub fn shade(self) -> Option<Shade> {
        match self {
            Decision::Undecided => None,
            Decision::Dark => Some(Shade::Dark),
            Decision::Light => Some(Shade::Light),
        }
    }

    /// Telemetry encoding: -1 undecided, 0 dark, 1 light.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Decision::Undecided => -1,
            Decision::Dark => 0,
            Decision::Light => 1,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Undecided => write!(f, "undecided"),
            Decision::Dark => write!(f, "dark"),
            Decision::Light => write!(f, "light"),
        }
    }
}

// ── BeliefModel ───────────────────────────────────────────────────────────────

/// Accumulates binary pseudo-observations into a Beta posterior over "the
/// probability the feature is light" and applies the credible-interval
/// decision rule.
///
/// The priors and threshold are fixed at construction; only the counters and
/// the decision latch mutate afterwards.  Counters are monotone for the
/// agent's lifetime — there is no reset.
#[derive(Clone, Debug)]
pub struct BeliefModel {
    light_prior: u32,
    dark_prior: u32,
    credible_threshold: f64,

    light_count: u32,
    dark_count: u32,
    decision: Decision,
}

impl BeliefModel {
    pub fn new(cfg: &AgentConfig) -> Self {
        Self {
            light_prior: cfg.light_prior,
            dark_prior: cfg.dark_prior,
            credible_threshold: cfg.credible_threshold,
            light_count: 0,
            dark_count: 0,
            decision: Decision::Undecided,
        }
    }

    /// Absorb one binary pseudo-observation, from any source.
    #[inline]
    pub fn add_evidence(&mut self, shade: Shade) {
        match shade {
            Shade::Light => self.light_count += 1,
            Shade::Dark => self.dark_count += 1,
        }
    }

    /// Posterior probability mass below 0.5 — the chance the light-rate
    /// parameter is under one half — and, while undecided, the decision rule:
    ///
    /// - mass above the credible threshold → the feature is rare-light,
    ///   decide `Dark`;
    /// - mass below `1 - threshold` → decide `Light`;
    /// - otherwise stay `Undecided`.
    ///
    /// Once a decision has latched this is a pure read: the probability is
    /// still computed (callers render it as a confidence indicator) but the
    /// decision cannot change.
    pub fn evaluate_decision(&mut self) -> f64 {
        let p_below_half = self.p_below_half();
        if self.decision == Decision::Undecided {
            if p_below_half > self.credible_threshold {
                self.decision = Decision::Dark;
            } else if p_below_half < 1.0 - self.credible_threshold {
                self.decision = Decision::Light;
            }
        }
        p_below_half
    }

    /// The posterior CDF at 0.5 without touching the decision latch.
    #[inline]
    pub fn p_below_half(&self) -> f64 {
        reg_inc_beta(self.alpha(), self.beta(), 0.5)
    }

    // ── Read-only telemetry surface ───────────────────────────────────────

    #[inline]
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// `(light_count, dark_count)` — accumulated evidence, priors excluded.
    #[inline]
    pub fn counts(&self) -> (u32, u32) {
        (self.light_count, self.dark_count)
    }

    /// Total accepted evidence units.
    #[inline]
    pub fn total_evidence(&self) -> u64 {
        self.light_count as u64 + self.dark_count as u64
    }

    /// Beta shape parameter α = light evidence + light prior.
    #[inline]
    pub fn alpha(&self) -> f64 {
        (self.light_count + self.light_prior) as f64
    }

    /// Beta shape parameter β = dark evidence + dark prior.
    #[inline]
    pub fn beta(&self) -> f64 {
        (self.dark_count + self.dark_prior) as f64
    }
}
