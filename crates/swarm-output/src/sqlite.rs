//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `decisions.db` file in the configured output directory
//! with two tables: `agent_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// Writes telemetry to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `decisions.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("decisions.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id          INTEGER NOT NULL,
                 tick              INTEGER NOT NULL,
                 light_count       INTEGER NOT NULL,
                 dark_count        INTEGER NOT NULL,
                 observation_count INTEGER NOT NULL,
                 decision          INTEGER NOT NULL,
                 tracked_neighbors INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick             INTEGER PRIMARY KEY,
                 decided_agents   INTEGER NOT NULL,
                 frames_sent      INTEGER NOT NULL,
                 frames_delivered INTEGER NOT NULL,
                 frames_dropped   INTEGER NOT NULL
             );",
        )?;

        Ok(Self {
            conn,
            finished: false,
        })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (agent_id, tick, light_count, dark_count, observation_count, \
                  decision, tracked_neighbors) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.tick,
                    row.light_count,
                    row.dark_count,
                    row.observation_count,
                    row.decision,
                    row.tracked_neighbors,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, decided_agents, frames_sent, frames_delivered, frames_dropped) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.tick,
                row.decided_agents,
                row.frames_sent,
                row.frames_delivered,
                row.frames_dropped,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
