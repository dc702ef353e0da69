//! `epi-graph` — the location topology agents move over.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`graph`]     | `LocationGraph` (CSR), `LocationGraphBuilder`                |
//! | [`generate`]  | Random, fully connected, and weight-matrix constructors      |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                               |
//!
//! # The removed sentinel
//!
//! A graph of `N` locations owns ids `0..N`.  The id `N` is reserved and
//! means "taken out of circulation"; it has no arcs and never appears as an
//! arc endpoint.  See [`LocationGraph::removed`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `LocationGraph`.        |

pub mod error;
pub mod generate;
pub mod graph;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{LocationGraph, LocationGraphBuilder};
