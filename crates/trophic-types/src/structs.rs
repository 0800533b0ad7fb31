//! Plain data structures shared across the workspace.
//!
//! - [`WorldBounds`] -- the rectangle every agent lives in.
//! - [`PopulationCounts`] -- per-species head count, the simulation's output.
//! - [`TraceRecord`] / [`TraceEvent`] -- append-only records for a trace sink.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Species;

// ---------------------------------------------------------------------------
// World bounds
// ---------------------------------------------------------------------------

/// Default world width in world units.
pub const DEFAULT_WORLD_WIDTH: f64 = 2560.0;

/// Default world height in world units.
pub const DEFAULT_WORLD_HEIGHT: f64 = 1440.0;

/// The axis-aligned rectangle `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub height: f64,
}

impl WorldBounds {
    /// Create bounds of the given size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp each coordinate of `point` into the bounds independently.
    ///
    /// This is a hard stop at the wall: only the position is affected.
    pub const fn clamp(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            point.x.max(0.0).min(self.width),
            point.y.max(0.0).min(self.height),
        )
    }

    /// Whether `point` lies inside the bounds (edges included).
    pub fn contains(&self, point: DVec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT)
    }
}

// ---------------------------------------------------------------------------
// Population counts
// ---------------------------------------------------------------------------

/// Head count of each population at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopulationCounts {
    /// Number of predators.
    pub predators: usize,
    /// Number of prey.
    pub prey: usize,
    /// Number of plants.
    pub plants: usize,
}

impl PopulationCounts {
    /// Sum over all species.
    pub const fn total(&self) -> usize {
        self.predators
            .saturating_add(self.prey)
            .saturating_add(self.plants)
    }

    /// Whether both mobile species (predators and prey) are gone.
    pub const fn mobile_extinct(&self) -> bool {
        self.predators == 0 && self.prey == 0
    }
}

/// Formats as the single termination line: `predators, prey, plants`.
impl core::fmt::Display for PopulationCounts {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.predators, self.prey, self.plants)
    }
}

// ---------------------------------------------------------------------------
// Trace records
// ---------------------------------------------------------------------------

/// One append-only record sent to a trace sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// The tick the record belongs to. The title is always tick 0.
    pub timestep: u64,
    /// What happened.
    pub event: TraceEvent,
}

/// Payload of a [`TraceRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TraceEvent {
    /// Free-text run description, written once before the first tick.
    Title {
        /// Human-readable description of the run.
        description: String,
    },
    /// Position of one agent at the end of a tick.
    Position {
        /// The agent's species.
        species: Species,
        /// World x coordinate.
        x: f64,
        /// World y coordinate.
        y: f64,
    },
}

impl TraceRecord {
    /// Build the title record.
    pub fn title(description: impl Into<String>) -> Self {
        Self {
            timestep: 0,
            event: TraceEvent::Title {
                description: description.into(),
            },
        }
    }

    /// Build a position record.
    pub const fn position(timestep: u64, species: Species, position: DVec2) -> Self {
        Self {
            timestep,
            event: TraceEvent::Position {
                species,
                x: position.x,
                y: position.y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_stops_at_walls() {
        let bounds = WorldBounds::new(100.0, 50.0);
        assert_eq!(bounds.clamp(DVec2::new(-3.0, 60.0)), DVec2::new(0.0, 50.0));
        assert_eq!(bounds.clamp(DVec2::new(120.0, -1.0)), DVec2::new(100.0, 0.0));
        assert_eq!(bounds.clamp(DVec2::new(10.0, 20.0)), DVec2::new(10.0, 20.0));
    }

    #[test]
    fn clamp_is_usable_in_const_context() {
        const CORNER: DVec2 = WorldBounds::new(100.0, 50.0).clamp(DVec2::new(-3.0, 60.0));
        assert_eq!(CORNER, DVec2::new(0.0, 50.0));
    }

    #[test]
    fn contains_includes_edges() {
        let bounds = WorldBounds::default();
        assert!(bounds.contains(DVec2::ZERO));
        assert!(bounds.contains(DVec2::new(2560.0, 1440.0)));
        assert!(!bounds.contains(DVec2::new(2560.1, 0.0)));
        assert!(!bounds.contains(DVec2::new(0.0, -0.1)));
    }

    #[test]
    fn counts_display_is_comma_separated() {
        let counts = PopulationCounts {
            predators: 3,
            prey: 41,
            plants: 102,
        };
        assert_eq!(counts.to_string(), "3, 41, 102");
        assert_eq!(counts.total(), 146);
    }

    #[test]
    fn mobile_extinction() {
        let mut counts = PopulationCounts {
            predators: 0,
            prey: 0,
            plants: 12,
        };
        assert!(counts.mobile_extinct());
        counts.prey = 1;
        assert!(!counts.mobile_extinct());
    }

    #[test]
    fn trace_record_json_shape() {
        let record = TraceRecord::position(7, Species::Plant, DVec2::new(1.5, 2.0));
        let json = serde_json::to_value(&record).unwrap_or_default();
        assert_eq!(json["timestep"], 7);
        assert_eq!(json["event"]["kind"], "Position");
        assert_eq!(json["event"]["species"], "Plant");

        let title = TraceRecord::title("run");
        assert_eq!(title.timestep, 0);
        assert!(matches!(title.event, TraceEvent::Title { ref description } if description == "run"));
    }
}
