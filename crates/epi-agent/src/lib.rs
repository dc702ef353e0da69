//! `epi-agent` — agents and the population container.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` — state, location, dwell timer, mask flag         |
//! | [`population`]  | `Population` — ordered `Vec<Agent>` plus tallies          |
//! | [`seed`]        | `Population::random`, `Population::random_states`         |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # Ordering
//!
//! Population order is significant: positional helpers such as
//! [`Population::give_masks`] act on "the first `k` agents", and exposure
//! budgets are spent in population order.  No operation in this workspace
//! reorders agents, so `AgentId(i)` names the same individual for a
//! population's whole lifetime.

pub mod agent;
pub mod error;
pub mod population;
pub mod seed;


pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use population::Population;
pub use seed::DEFAULT_INFECT_PORTION;
