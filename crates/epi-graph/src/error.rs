//! Graph-subsystem error type.

use thiserror::Error;

use epi_core::{EpiError, LocationId};

/// Errors produced by `epi-graph`.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("arc {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: LocationId, to: LocationId, weight: f64 },

    #[error("no arc {from} -> {to}")]
    NoArc { from: LocationId, to: LocationId },

    #[error("cannot place {edges} distinct arcs on {nodes} locations (max {max})")]
    TooManyArcs { nodes: usize, edges: usize, max: usize },

    #[error("weight matrix row {row} has {len} columns, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error(transparent)]
    Core(#[from] EpiError),
}

pub type GraphResult<T> = Result<T, GraphError>;
