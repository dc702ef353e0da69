use epi_core::{AgentId, LocationId};
use epi_intervention::InterventionError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("horizon must be at least one step")]
    ZeroHorizon,

    #[error("{agents} agents cannot be placed on a topology with no locations")]
    EmptyTopology { agents: usize },

    #[error("{agent} is at {location}, beyond the removed sentinel {removed}")]
    AgentOutOfRange {
        agent:    AgentId,
        location: LocationId,
        removed:  LocationId,
    },

    #[error("control location {location} is not one of the {count} ordinary locations")]
    ControlOutOfRange { location: LocationId, count: usize },

    #[error(transparent)]
    Intervention(#[from] InterventionError),
}

pub type SimResult<T> = Result<T, SimError>;
