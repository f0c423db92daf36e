//! Local sensing: magnitude classification and sample-rate gating.

use swarm_core::{AgentConfig, LightLevel, Shade, Tick};

/// Classify a raw sensor magnitude against the configured thresholds.
///
/// Magnitudes below `dark_ceiling` read as dark, at or above `light_floor`
/// as light, and the band between is the ambiguous gray zone that produces
/// no evidence.
#[inline]
pub fn classify(raw: u16, cfg: &AgentConfig) -> LightLevel {
    if raw < cfg.dark_ceiling {
        LightLevel::Dark
    } else if raw < cfg.light_floor {
        LightLevel::Gray
    } else {
        LightLevel::Light
    }
}

/// Gates how often an instantaneous reading may become evidence.
///
/// A sample is attempted once per `observe_interval_ticks`.  An ambiguous
/// reading consumes the attempt — the timer resets and the agent waits a
/// full interval before trying again — but yields nothing.  This keeps
/// boundary noise from ever reaching the belief model.
#[derive(Debug)]
pub struct SensingGate {
    interval_ticks: u64,
    last_attempt: Tick,
}

impl SensingGate {
    pub fn new(cfg: &AgentConfig) -> Self {
        Self {
            interval_ticks: cfg.observe_interval_ticks,
            last_attempt: Tick::ZERO,
        }
    }

    /// Offer the current classification.  Returns a fresh observation when
    /// the interval has elapsed and the reading is non-ambiguous.
    pub fn poll(&mut self, level: LightLevel, now: Tick) -> Option<Shade> {
        if self.last_attempt.0 + self.interval_ticks <= now.0 {
            self.last_attempt = now;
            level.shade()
        } else {
            None
        }
    }
}
