//! `epi-core` — foundational types for the `epi-graph` epidemic framework.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `AgentId`                               |
//! | [`state`]       | `EpiState` (SEIRD), `StateCounts` snapshot            |
//! | [`params`]      | `SeirdParams` — transition-model constants            |
//! | [`config`]      | `SimConfig` — horizon and master seed                 |
//! | [`rng`]         | `SimRng` (simulator-owned stream)                     |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{EpiError, EpiResult};
pub use ids::{AgentId, LocationId};
pub use params::SeirdParams;
pub use rng::SimRng;
pub use state::{EpiState, StateCounts};
