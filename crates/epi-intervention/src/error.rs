use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InterventionError {
    #[error("aggressive detection needs at least one control location")]
    NoControlLocations,

    #[error(transparent)]
    Core(#[from] EpiError),
}

pub type InterventionResult<T> = Result<T, InterventionError>;
