//! Simulation step, engine loop, configuration, and trace sinks for the
//! Trophic simulation.
//!
//! This crate owns the per-tick orchestration that drives the three
//! populations: predators chase prey, prey chase plants, then each
//! population is swept and replenished in a fixed order.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `trophic-config.yaml` into
//!   strongly-typed structs.
//! - [`runner`] -- The [`Engine`] that runs the tick loop to completion.
//! - [`state`] -- [`SimulationState`]: the three populations and the spawner.
//! - [`step`] -- [`run_step`]: one tick of updates, sweeps, and births.
//! - [`trace`] -- [`TraceSink`] trait and in-memory sinks.
//!
//! [`Engine`]: runner::Engine
//! [`SimulationState`]: state::SimulationState
//! [`run_step`]: step::run_step
//! [`TraceSink`]: trace::TraceSink

pub mod config;
pub mod runner;
pub mod state;
pub mod step;
pub mod trace;
