//! Configurable parameters for agent steering and consumption.
//!
//! [`Kinematics`] bundles every constant [`Agent::update`] reads. The
//! defaults reproduce the classic predator-prey demo; `trophic-core` builds
//! one from the YAML configuration.
//!
//! [`Agent::update`]: crate::agent::Agent::update

use serde::{Deserialize, Serialize};
use trophic_types::WorldBounds;

/// Default attraction gain: force = gain * (target - position).
pub const DEFAULT_ATTRACTION_GAIN: f64 = 0.1;

/// Default integration gain: velocity += gain * force.
pub const DEFAULT_INTEGRATION_GAIN: f64 = 0.05;

/// Default squared distance under which a target is eaten (20 world units).
pub const DEFAULT_PREDATION_RADIUS_SQ: f64 = 400.0;

/// Default squared distance under which a candidate can be locked (~316 units).
pub const DEFAULT_ACQUISITION_RADIUS_SQ: f64 = 100_000.0;

/// Parameters for the one-tick agent update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// The world rectangle positions are clamped into.
    pub bounds: WorldBounds,
    /// Gain applied to the vector towards the target to get the force.
    pub attraction_gain: f64,
    /// Gain applied to the force when integrating velocity.
    pub integration_gain: f64,
    /// Squared distance strictly below which the locked target is eaten.
    pub predation_radius_sq: f64,
    /// Squared distance strictly below which the nearest candidate is locked.
    pub acquisition_radius_sq: f64,
    /// Whether an agent that just ate looks for a new target in the same
    /// update. When `false` it keeps steering towards the eaten target until
    /// the next update clears the stale handle.
    pub retarget_after_kill: bool,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            bounds: WorldBounds::default(),
            attraction_gain: DEFAULT_ATTRACTION_GAIN,
            integration_gain: DEFAULT_INTEGRATION_GAIN,
            predation_radius_sq: DEFAULT_PREDATION_RADIUS_SQ,
            acquisition_radius_sq: DEFAULT_ACQUISITION_RADIUS_SQ,
            retarget_after_kill: true,
        }
    }
}
