//! `epi-sim` — step loop orchestrator for the epi-graph framework.
//!
//! # Step protocol
//!
//! ```text
//! while step <= horizon:
//!   if step > 0 and last snapshot has no Infectious agents:
//!       repeat the last snapshot                    (early fade-out)
//!   else:
//!     ① Bucket    — group agents by location, N ordinary buckets + the
//!                   removed sentinel, keeping population order in each.
//!     ② SEIRD     — per ordinary bucket: exposure budget, then per agent
//!                   tick timer and apply at most one transition.
//!                   Sentinel bucket: timer-driven E→I and I→R/D only.
//!     ③ Mobility  — MobilityPolicy::apply on the whole population.
//!     ④ Intervene — InterventionPolicy::apply on the whole population.
//!     ⑤ Record    — append the S,E,I,R,D counts to the history.
//!   step += 1
//! ```
//!
//! A completed run therefore holds `horizon + 1` snapshots.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`Simulator::rollouts`] on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust
//! use epi_agent::Population;
//! use epi_core::SimRng;
//! use epi_graph::LocationGraph;
//! use epi_intervention::NoIntervention;
//! use epi_mobility::RandomWalk;
//! use epi_sim::SimBuilder;
//!
//! let mut rng = SimRng::new(7);
//! let graph = LocationGraph::random(10, 30, &mut rng).unwrap();
//! let population = Population::random(200, &graph, 0.05, &mut rng).unwrap();
//!
//! let mut sim = SimBuilder::new(population, graph, RandomWalk, NoIntervention, 50)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! sim.run();
//! assert_eq!(sim.history().len(), 51);
//! println!("peak infected: {}", sim.max_infected());
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod seird;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;
