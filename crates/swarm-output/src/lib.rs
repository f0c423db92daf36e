//! `swarm-output` — telemetry writers for the `rust_swarm` framework.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                 |
//! |-----------|---------|-----------------------------------------------|
//! | *(none)*  | CSV     | `agent_snapshots.csv`, `tick_summaries.csv`   |
//! | `sqlite`  | SQLite  | `decisions.db`                                |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`SwarmOutputObserver`], which implements `swarm_sim::SwarmObserver`.
//!
//! The snapshot columns are the swarm's convergence record: per agent, the
//! accumulated evidence counts, the self-observation count, the decision,
//! and the neighbor-table occupancy, sampled at the configured interval.
//!
//! # Usage
//!
//! ```rust,ignore
//! use swarm_output::{CsvWriter, SwarmOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SwarmOutputObserver::new(writer);
//! swarm.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SwarmOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
