//! Unit and integration tests for the output writers.

use std::fs;

use tempfile::tempdir;

use swarm_agent::SwarmAgent;
use swarm_comms::Message;
use swarm_core::{AgentConfig, AgentId, AgentRng, PeerId, Shade, SwarmConfig, Tick};
use swarm_sim::{FillRatioField, FullMesh, SwarmBuilder};

use crate::{
    AgentSnapshotRow, CsvWriter, OutputWriter, SwarmOutputObserver, TickSummaryRow,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snapshot_row() -> AgentSnapshotRow {
    AgentSnapshotRow {
        agent_id: 3,
        tick: 40,
        light_count: 12,
        dark_count: 2,
        observation_count: 9,
        decision: 1,
        tracked_neighbors: 5,
    }
}

fn summary_row() -> TickSummaryRow {
    TickSummaryRow {
        tick: 40,
        decided_agents: 6,
        frames_sent: 8,
        frames_delivered: 56,
        frames_dropped: 0,
    }
}

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn capture_reads_the_telemetry_surface() {
        let mut agent = SwarmAgent::new(PeerId(1), AgentConfig::default());
        let mut rng = AgentRng::new(0, AgentId(0));

        agent.deliver(
            Message { peer: PeerId(2), shade: Shade::Dark, obs_seq: 0 },
            1.0,
        );
        // Gray reading: no self-observation, only the peer report lands.
        agent.step(Tick(0), 500, &mut rng);

        let row = AgentSnapshotRow::capture(0, Tick(0), &agent);
        assert_eq!(row.light_count, 0);
        assert_eq!(row.dark_count, 1);
        assert_eq!(row.observation_count, 0);
        assert_eq!(row.decision, -1);
        assert_eq!(row.tracked_neighbors, 1);
    }
}

#[cfg(test)]
mod csv_backend {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.write_snapshots(&[snapshot_row()]).unwrap();
        writer.write_tick_summary(&summary_row()).unwrap();
        writer.finish().unwrap();

        let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        let mut lines = snapshots.lines();
        assert_eq!(
            lines.next(),
            Some("agent_id,tick,light_count,dark_count,observation_count,decision,tracked_neighbors")
        );
        assert_eq!(lines.next(), Some("3,40,12,2,9,1,5"));

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().count(), 2);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod observer {
    use super::*;

    #[test]
    fn records_a_full_run() {
        let dir = tempdir().unwrap();
        let config = SwarmConfig {
            agent: AgentConfig {
                observe_interval_ticks: 2,
                rw_mean_straight_ticks: 1_000_000,
                ..AgentConfig::default()
            },
            num_agents: 4,
            total_ticks: 200,
            seed: 11,
            ticks_per_sec: 32,
            snapshot_interval_ticks: 5,
        };

        let mut swarm = SwarmBuilder::new(config, FillRatioField::new(1.0), FullMesh)
            .build()
            .unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = SwarmOutputObserver::new(writer);
        let summary = swarm.run(&mut observer);

        assert!(observer.take_error().is_none());
        assert_eq!(summary.decided_fraction(Shade::Light), 1.0);

        // One summary row per tick run, plus the header.
        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().count() as u64, summary.final_tick.0 + 1);

        // Snapshots at ticks 0, 5, 10, … — four agents per snapshot.
        let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        let data_lines = snapshots.lines().count() - 1;
        assert!(data_lines > 0);
        assert_eq!(data_lines % 4, 0);
    }
}

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod sqlite_backend {
    use super::*;
    use crate::SqliteWriter;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempdir().unwrap();
        let mut writer = SqliteWriter::new(dir.path()).unwrap();
        writer
            .write_snapshots(&[snapshot_row(), snapshot_row()])
            .unwrap();
        writer.write_tick_summary(&summary_row()).unwrap();
        writer.finish().unwrap();
        drop(writer);

        let conn = rusqlite::Connection::open(dir.path().join("decisions.db")).unwrap();
        let snapshots: i64 = conn
            .query_row("SELECT COUNT(*) FROM agent_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(snapshots, 2);

        let decided: i64 = conn
            .query_row("SELECT decided_agents FROM tick_summaries WHERE tick = 40", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(decided, 6);
    }
}
