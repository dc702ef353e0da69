//! `epi-intervention` — detection and quarantine policies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`policy`]    | `InterventionPolicy` trait                                  |
//! | [`noop`]      | `NoIntervention` — nobody is removed                        |
//! | [`detection`] | `AggressiveDetection` — single- or multi-node quarantine    |
//! | [`error`]     | `InterventionError`, `InterventionResult<T>`                |
//!
//! An intervention runs after mobility on every step.  It may only move
//! agents between ordinary locations and the removed sentinel
//! (`graph.removed()`); it never changes agent count, state, timer, or mask.

pub mod detection;
pub mod error;
pub mod noop;
pub mod policy;

#[cfg(test)]
mod tests;

pub use detection::AggressiveDetection;
pub use error::{InterventionError, InterventionResult};
pub use noop::NoIntervention;
pub use policy::InterventionPolicy;
