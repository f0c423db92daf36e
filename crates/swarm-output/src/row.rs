//! Plain data row types written by output backends.

use swarm_agent::SwarmAgent;
use swarm_core::Tick;

/// One agent's belief state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick: u64,
    /// Accumulated light evidence units (priors excluded).
    pub light_count: u32,
    /// Accumulated dark evidence units (priors excluded).
    pub dark_count: u32,
    /// Accepted self-observations so far.
    pub observation_count: u32,
    /// -1 undecided, 0 dark, 1 light.
    pub decision: i8,
    /// Occupied neighbor-table slots.
    pub tracked_neighbors: u32,
}

impl AgentSnapshotRow {
    /// Capture one agent's telemetry surface.
    pub fn capture(agent_id: u32, tick: Tick, agent: &SwarmAgent) -> Self {
        let (light_count, dark_count) = agent.evidence();
        Self {
            agent_id,
            tick: tick.0,
            light_count,
            dark_count,
            observation_count: agent.observation_count() as u32,
            decision: agent.decision().as_i8(),
            tracked_neighbors: agent.tracked_neighbors() as u32,
        }
    }
}

/// Transport and decision counters for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick: u64,
    pub decided_agents: u64,
    pub frames_sent: u64,
    pub frames_delivered: u64,
    pub frames_dropped: u64,
}
