//! `epi-mobility` — how agents move between locations each step.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`policy`]     | `MobilityPolicy` trait                                          |
//! | [`stationary`] | `Stationary` — nobody moves                                     |
//! | [`walk`]       | `RandomWalk`, `RandomWalkWithStay`, `WeightedStayWalk`          |
//! | [`density`]    | `NormalizedDensityWalk`, `SocialDistanceWalk`                   |
//!
//! # Shared rules
//!
//! Every variant:
//!
//! - leaves `Deceased` agents exactly where they are;
//! - changes only locations (never state, timer, mask, or agent count);
//! - only moves an agent along an arc of the graph or keeps it in place.
//!   The removed sentinel has no arcs, so agents held there by an
//!   intervention are never moved by a walk.

pub mod density;
pub mod policy;
pub mod stationary;
pub mod walk;


pub use density::{NormalizedDensityWalk, SocialDistanceWalk};
pub use policy::MobilityPolicy;
pub use stationary::Stationary;
pub use walk::{RandomWalk, RandomWalkWithStay, WeightedStayWalk};
