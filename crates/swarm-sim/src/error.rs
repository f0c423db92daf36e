use swarm_core::SwarmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("swarm configuration rejected: {0}")]
    Config(#[source] SwarmError),
}

pub type SimResult<T> = Result<T, SimError>;
