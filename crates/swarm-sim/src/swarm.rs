//! The `Swarm` runner and its tick loop.

use swarm_agent::SwarmAgent;
use swarm_belief::Decision;
use swarm_comms::{Frame, Message};
use swarm_core::{AgentId, AgentRng, Shade, SimClock, SimRng, SwarmConfig, Tick};

use crate::field::LightField;
use crate::observer::SwarmObserver;
use crate::topology::Topology;

// ── Per-tick counters ─────────────────────────────────────────────────────────

/// Transport and decision counters for one tick, handed to
/// [`SwarmObserver::on_tick_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickStats {
    /// Agents holding a decision at the end of this tick.
    pub decided_agents: usize,
    /// Outbound frames collected this tick.
    pub frames_sent: usize,
    /// Frame deliveries accepted into a mailbox (one frame may be delivered
    /// to many recipients).
    pub frames_delivered: usize,
    /// Deliveries dropped by a held or sentinel-failing mailbox.
    pub frames_dropped: usize,
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// End-of-run statistics: the decision tally a trial harness turns into
/// duration, accuracy, and undecided-count figures.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// Tick the run stopped at (early stop or `total_ticks`).
    pub final_tick: Tick,
    pub decided_dark: usize,
    pub decided_light: usize,
    pub undecided: usize,
}

impl RunSummary {
    /// `true` when no agent was left undecided.
    pub fn all_decided(&self) -> bool {
        self.undecided == 0
    }

    /// Fraction of the swarm that decided on `shade`.  With `shade` set to
    /// the arena's true majority color this is the decision accuracy.
    pub fn decided_fraction(&self, shade: Shade) -> f64 {
        let total = self.decided_dark + self.decided_light + self.undecided;
        if total == 0 {
            return 0.0;
        }
        let hits = match shade {
            Shade::Dark => self.decided_dark,
            Shade::Light => self.decided_light,
        };
        hits as f64 / total as f64
    }
}

// ── Swarm ─────────────────────────────────────────────────────────────────────

/// Drives a population of [`SwarmAgent`]s through the per-tick contract:
/// sensor read, step, transmit poll, transport delivery.
///
/// Create via [`SwarmBuilder`][crate::SwarmBuilder].
pub struct Swarm<F: LightField, T: Topology> {
    /// Run configuration (population, seed, tick budget, …).
    pub config: SwarmConfig,

    /// Tracks the current tick and maps it to simulated seconds.
    pub clock: SimClock,

    pub(crate) agents: Vec<SwarmAgent>,
    pub(crate) rngs: Vec<AgentRng>,
    pub(crate) field: F,
    pub(crate) topology: T,
    pub(crate) sim_rng: SimRng,
}

impl<F: LightField, T: Topology> Swarm<F, T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until `config.total_ticks`, stopping early
    /// once every agent has decided (the early stop fires only after that
    /// tick's observer callbacks, so the deciding tick is never unlogged).
    pub fn run<O: SwarmObserver>(&mut self, observer: &mut O) -> RunSummary {
        loop {
            let now = self.clock.current_tick;
            if now.0 >= self.config.total_ticks {
                break;
            }

            observer.on_tick_start(now);
            let stats = self.step_tick(now);
            observer.on_tick_end(now, &stats);
            if self.config.snapshot_interval_ticks > 0
                && now.0 % self.config.snapshot_interval_ticks == 0
            {
                observer.on_snapshot(now, &self.agents);
            }

            self.clock.advance();

            if stats.decided_agents == self.agents.len() {
                break;
            }
        }

        let summary = self.summary();
        observer.on_run_end(&summary);
        summary
    }

    /// Run exactly `n` ticks from the current position (ignores the tick
    /// budget and the early stop).  Useful for tests and incremental
    /// stepping.
    pub fn run_ticks<O: SwarmObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let stats = self.step_tick(now);
            observer.on_tick_end(now, &stats);
            if self.config.snapshot_interval_ticks > 0
                && now.0 % self.config.snapshot_interval_ticks == 0
            {
                observer.on_snapshot(now, &self.agents);
            }
            self.clock.advance();
        }
    }

    /// Read-only view of the population, indexed by `AgentId`.
    pub fn agents(&self) -> &[SwarmAgent] {
        &self.agents
    }

    /// Current decision tally.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary {
            final_tick: self.clock.current_tick,
            decided_dark: 0,
            decided_light: 0,
            undecided: 0,
        };
        for agent in &self.agents {
            match agent.decision() {
                Decision::Dark => summary.decided_dark += 1,
                Decision::Light => summary.decided_light += 1,
                Decision::Undecided => summary.undecided += 1,
            }
        }
        summary
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_tick(&mut self, now: Tick) -> TickStats {
        // ── Phase 1: step every agent ─────────────────────────────────────
        //
        // Each agent consumes only its own state and its own RNG; the field
        // is shared read-only.  That makes this phase embarrassingly
        // parallel, and delivery below stays sequential either way.
        self.step_agents(now);

        // ── Phase 2: collect outbound frames ──────────────────────────────
        //
        // Ascending agent order, so delivery below is deterministic.
        let frames: Vec<(AgentId, Frame)> = self
            .agents
            .iter()
            .enumerate()
            .filter_map(|(i, agent)| {
                agent.pending_frame().map(|frame| (AgentId(i as u32), frame))
            })
            .collect();

        // ── Phase 3: transport delivery ───────────────────────────────────
        //
        // The transport owns integrity: a frame failing its checksum is
        // discarded here and the decoder never sees it.
        let mut stats = TickStats {
            frames_sent: frames.len(),
            ..TickStats::default()
        };
        for (sender, frame) in frames {
            if !frame.checksum_ok() {
                continue;
            }
            let message = Message::decode(&frame);
            for to in self
                .topology
                .recipients(sender, self.agents.len(), &mut self.sim_rng)
            {
                if to == sender {
                    continue;
                }
                // No geometry in this driver: the distance estimate the
                // receive callback carries is a constant.
                if self.agents[to.index()].deliver(message, 0.0) {
                    stats.frames_delivered += 1;
                } else {
                    stats.frames_dropped += 1;
                }
            }
        }

        stats.decided_agents = self
            .agents
            .iter()
            .filter(|a| a.decision().is_decided())
            .count();
        stats
    }

    #[cfg(not(feature = "parallel"))]
    fn step_agents(&mut self, now: Tick) {
        let field = &self.field;
        for (i, (agent, rng)) in self.agents.iter_mut().zip(self.rngs.iter_mut()).enumerate() {
            let raw = field.sample(AgentId(i as u32), now, rng);
            agent.step(now, raw, rng);
        }
    }

    #[cfg(feature = "parallel")]
    fn step_agents(&mut self, now: Tick) {
        use rayon::prelude::*;

        let field = &self.field;
        self.agents
            .par_iter_mut()
            .zip(self.rngs.par_iter_mut())
            .enumerate()
            .for_each(|(i, (agent, rng))| {
                let raw = field.sample(AgentId(i as u32), now, rng);
                agent.step(now, raw, rng);
            });
    }
}
