//! Run observer trait for progress reporting and data collection.

use swarm_agent::SwarmAgent;
use swarm_core::Tick;

use crate::swarm::{RunSummary, TickStats};

/// Callbacks invoked by [`Swarm::run`][crate::Swarm::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SwarmObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} decided", stats.decided_agents);
///         }
///     }
/// }
/// ```
pub trait SwarmObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's transport and
    /// decision counters.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks).  Provides read-only access to every agent so output writers
    /// can record telemetry without the runner knowing any specific format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[SwarmAgent]) {}

    /// Called once after the final tick (natural end or early stop).
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SwarmObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SwarmObserver for NoopObserver {}
