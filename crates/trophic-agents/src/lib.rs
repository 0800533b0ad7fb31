//! Agent kinematics, populations, spawning, and lifecycle for the Trophic
//! simulation.
//!
//! This crate contains the per-agent logic -- everything that operates on
//! agents without touching configuration files or trace output. It sits
//! between `trophic-types` (plain data) and `trophic-core` (the step and
//! run orchestration).
//!
//! # Modules
//!
//! - [`agent`] -- The [`Agent`] record and its one-tick [`Agent::update`] rule.
//! - [`config`] -- Steering and consumption parameters ([`Kinematics`]).
//! - [`lifecycle`] -- Death sweeps and reproduction passes.
//! - [`population`] -- Per-species collection with an id index ([`Population`]).
//! - [`spawn`] -- Seeded agent construction ([`Spawner`]).

pub mod agent;
pub mod config;
pub mod lifecycle;
pub mod population;
pub mod spawn;

// Re-export primary types at crate root for convenience.
pub use agent::{Agent, UpdateOutcome};
pub use config::Kinematics;
pub use lifecycle::{DeathCause, ReproductionRule, SweepReport};
pub use population::Population;
pub use spawn::Spawner;
