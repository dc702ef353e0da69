use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("cannot place {agents} agents on a topology with no locations")]
    EmptyTopology { agents: usize },

    #[error(transparent)]
    Core(#[from] EpiError),
}

pub type AgentResult<T> = Result<T, AgentError>;
