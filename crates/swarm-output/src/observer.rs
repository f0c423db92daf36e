//! `SwarmOutputObserver<W>` — bridges `SwarmObserver` to an `OutputWriter`.

use swarm_agent::SwarmAgent;
use swarm_core::Tick;
use swarm_sim::{RunSummary, SwarmObserver, TickStats};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SwarmObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `swarm.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SwarmOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SwarmOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `swarm.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SwarmObserver for SwarmOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickSummaryRow {
            tick: tick.0,
            decided_agents: stats.decided_agents as u64,
            frames_sent: stats.frames_sent as u64,
            frames_delivered: stats.frames_delivered as u64,
            frames_dropped: stats.frames_dropped as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[SwarmAgent]) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .enumerate()
            .map(|(i, agent)| AgentSnapshotRow::capture(i as u32, tick, agent))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
