//! Shared type definitions for the Trophic simulation.
//!
//! This crate is the leaf of the workspace. It holds the plain data that
//! every other crate passes around: agent identifiers, the species tag,
//! world bounds, population counts, and the records emitted to a trace
//! sink. Nothing here touches randomness or I/O.
//!
//! # Modules
//!
//! - [`ids`] -- [`AgentId`] handle type.
//! - [`enums`] -- [`Species`] tag.
//! - [`structs`] -- [`WorldBounds`], [`PopulationCounts`], trace records.

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::Species;
pub use glam::DVec2;
pub use ids::AgentId;
pub use structs::{PopulationCounts, TraceEvent, TraceRecord, WorldBounds};
