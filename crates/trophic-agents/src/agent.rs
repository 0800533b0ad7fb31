//! The agent record and its one-tick update rule.
//!
//! Predators, prey, and plants share a single [`Agent`] type; the species
//! tag and the speed cap are the only things that differ. An agent never
//! owns another agent: its target is an [`AgentId`] resolved against the
//! food population on every update, so a target that died or was swept
//! simply stops resolving.

use trophic_types::{AgentId, DVec2, Species};

use crate::config::Kinematics;
use crate::population::Population;

/// A single simulated organism.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Stable handle, unique within a run. Must not change after insertion
    /// into a [`Population`].
    pub id: AgentId,
    /// Which population this agent belongs to.
    pub species: Species,
    /// World coordinates, kept inside the world bounds by every update.
    pub position: DVec2,
    /// Displacement applied per tick, magnitude capped at `vmax`.
    pub velocity: DVec2,
    /// Speed cap; `0.0` means immobile.
    pub vmax: f64,
    /// False once eaten. Dead agents stay in their population until the
    /// end-of-tick sweep.
    pub alive: bool,
    /// The agent currently being pursued, if any.
    pub target: Option<AgentId>,
    /// Number of updates this agent has received.
    pub age: u32,
    /// Number of targets eaten since the last reproduction.
    pub energy: u32,
}

/// What an update did to the rest of the world.
///
/// The caller applies the kill to the food population before the next
/// agent updates, so at most one consumer ever claims a victim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct UpdateOutcome {
    /// The victim this agent ate, if it ate this tick.
    pub consumed: Option<AgentId>,
}

impl Agent {
    /// Create a live agent at rest with zeroed counters and no target.
    pub const fn new(id: AgentId, species: Species, position: DVec2, vmax: f64) -> Self {
        Self {
            id,
            species,
            position,
            velocity: DVec2::ZERO,
            vmax,
            alive: true,
            target: None,
            age: 0,
            energy: 0,
        }
    }

    /// Whether this agent can move at all.
    pub fn is_mobile(&self) -> bool {
        self.vmax > 0.0
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Advance this agent by exactly one tick.
    ///
    /// `food` is the population this agent feeds on. It is only read; a
    /// successful consumption is reported through the returned
    /// [`UpdateOutcome`] and must be applied by the caller.
    ///
    /// Order of operations: age, immobility early-out, drop a stale target,
    /// eat the target if within the predation radius, acquire the nearest
    /// candidate if untargeted, steer, cap speed, move, clamp to the world.
    pub fn update(&mut self, food: &Population, kinematics: &Kinematics) -> UpdateOutcome {
        self.age = self.age.saturating_add(1);

        if !self.is_mobile() {
            return UpdateOutcome::default();
        }

        // Dead or swept targets resolve to nothing.
        let mut target = self
            .target
            .and_then(|id| food.get(id))
            .filter(|candidate| candidate.alive);
        self.target = target.map(|candidate| candidate.id);

        let mut consumed = None;
        if let Some(victim) = target {
            if self.position.distance_squared(victim.position) < kinematics.predation_radius_sq {
                consumed = Some(victim.id);
                self.energy = self.energy.saturating_add(1);
                tracing::trace!(
                    consumer = %self.id,
                    victim = %victim.id,
                    species = %self.species,
                    energy = self.energy,
                    "Target consumed"
                );
                if kinematics.retarget_after_kill {
                    target = None;
                    self.target = None;
                }
            }
        }

        if self.target.is_none() {
            // The caller has not applied this tick's kill yet; skip the
            // victim explicitly so it cannot be re-locked.
            let own_id = self.id;
            target = food
                .nearest_alive(self.position, |candidate| {
                    candidate.id == own_id || Some(candidate.id) == consumed
                })
                .filter(|(_, dist_sq)| *dist_sq < kinematics.acquisition_radius_sq)
                .map(|(candidate, _)| candidate);
            self.target = target.map(|candidate| candidate.id);
        }

        let force = target.map_or(DVec2::ZERO, |t| {
            (t.position - self.position) * kinematics.attraction_gain
        });
        self.velocity += force * kinematics.integration_gain;

        let speed = self.velocity.length();
        if speed > self.vmax && speed > 0.0 {
            self.velocity = self.velocity / speed * self.vmax;
        }

        self.position = kinematics.bounds.clamp(self.position + self.velocity);

        UpdateOutcome { consumed }
    }
}
