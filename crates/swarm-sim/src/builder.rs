//! Fluent construction of a [`Swarm`].

use swarm_agent::SwarmAgent;
use swarm_core::{AgentId, AgentRng, PeerId, SimRng, SwarmConfig};

use crate::field::LightField;
use crate::swarm::Swarm;
use crate::topology::Topology;
use crate::{SimError, SimResult};

/// Builder for [`Swarm<F, T>`].
///
/// Validates the configuration, seeds one deterministic RNG per agent, and
/// assigns every agent its non-zero wire identity (`PeerId = index + 1`).
///
/// # Example
///
/// ```rust,ignore
/// let mut swarm = SwarmBuilder::new(config, FillRatioField::new(0.8), FullMesh)
///     .build()?;
/// let summary = swarm.run(&mut NoopObserver);
/// ```
pub struct SwarmBuilder<F: LightField, T: Topology> {
    config: SwarmConfig,
    field: F,
    topology: T,
}

impl<F: LightField, T: Topology> SwarmBuilder<F, T> {
    pub fn new(config: SwarmConfig, field: F, topology: T) -> Self {
        Self {
            config,
            field,
            topology,
        }
    }

    /// Validate the configuration and assemble a ready-to-run [`Swarm`].
    pub fn build(self) -> SimResult<Swarm<F, T>> {
        self.config.validate().map_err(SimError::Config)?;

        let n = self.config.num_agents;
        let agents: Vec<SwarmAgent> = (0..n as u32)
            .map(|i| SwarmAgent::new(PeerId::from_agent(AgentId(i)), self.config.agent.clone()))
            .collect();
        let rngs: Vec<AgentRng> = (0..n as u32)
            .map(|i| AgentRng::new(self.config.seed, AgentId(i)))
            .collect();

        // The simulation-level stream must not alias agent 0's stream
        // (whose seed is the unmixed global seed), so derive a child.
        let mut root = SimRng::new(self.config.seed);
        let sim_rng = root.child(1);

        Ok(Swarm {
            clock: self.config.make_clock(),
            config: self.config,
            agents,
            rngs,
            field: self.field,
            topology: self.topology,
            sim_rng,
        })
    }
}
