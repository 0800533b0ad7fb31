//! Seeded agent construction.
//!
//! The [`Spawner`] owns the run's random number generator and its id
//! counter, so every random draw in a simulation (initial placement,
//! replenished plants, offspring jitter) comes from one seedable stream and
//! every agent gets a fresh handle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trophic_types::{AgentId, DVec2, Species, WorldBounds};

use crate::agent::Agent;
use crate::population::Population;

/// Creates agents with unique ids and random positions.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: StdRng,
    next_id: AgentId,
    bounds: WorldBounds,
}

impl Spawner {
    /// Create a spawner drawing from `rng` and placing agents in `bounds`.
    pub const fn new(rng: StdRng, bounds: WorldBounds) -> Self {
        Self {
            rng,
            next_id: AgentId::FIRST,
            bounds,
        }
    }

    /// Create a spawner with a deterministic generator.
    pub fn from_seed(seed: u64, bounds: WorldBounds) -> Self {
        Self::new(StdRng::seed_from_u64(seed), bounds)
    }

    /// Number of ids handed out so far.
    pub const fn issued(&self) -> u64 {
        self.next_id.into_inner()
    }

    /// Create an agent at a uniformly random position in the world.
    pub fn spawn_random(&mut self, species: Species, vmax: f64) -> Agent {
        let x = uniform(&mut self.rng, self.bounds.width);
        let y = uniform(&mut self.rng, self.bounds.height);
        let id = self.allocate_id();
        Agent::new(id, species, DVec2::new(x, y), vmax)
    }

    /// Create an offspring of `parent` within `jitter` units per axis.
    ///
    /// The child inherits species and speed cap, nothing else. A parent near
    /// a wall can place its child outside the world; the child's first
    /// update clamps it back in.
    pub fn spawn_offspring(&mut self, parent: &Agent, jitter: f64) -> Agent {
        let dx = symmetric(&mut self.rng, jitter);
        let dy = symmetric(&mut self.rng, jitter);
        let position = parent.position + DVec2::new(dx, dy);
        let id = self.allocate_id();
        Agent::new(id, parent.species, position, parent.vmax)
    }

    /// Append `count` randomly placed agents to `population`.
    pub fn populate(&mut self, population: &mut Population, count: u32, vmax: f64) {
        let species = population.species();
        for _ in 0..count {
            let agent = self.spawn_random(species, vmax);
            population.push(agent);
        }
    }

    fn allocate_id(&mut self) -> AgentId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

/// Uniform draw in `[0, extent)`; degenerate extents collapse to 0.
fn uniform(rng: &mut StdRng, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Uniform draw in `[-half_width, half_width]`; degenerate widths collapse to 0.
fn symmetric(rng: &mut StdRng, half_width: f64) -> f64 {
    if half_width > 0.0 {
        rng.random_range(-half_width..=half_width)
    } else {
        0.0
    }
}
