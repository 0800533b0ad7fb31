//! The mutable simulation state passed through the tick loop.

use trophic_agents::{Population, Spawner};
use trophic_types::{PopulationCounts, Species};

use crate::config::SimulationConfig;

/// Everything that changes from one tick to the next.
///
/// The three populations are kept apart so that one trophic pass can read
/// the food layer while mutating the consumer layer.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Number of ticks completed so far; also the index of the next tick.
    pub tick: u64,
    /// The predator population.
    pub predators: Population,
    /// The prey population.
    pub prey: Population,
    /// The plant population.
    pub plants: Population,
    /// Id allocator and random stream for every spawn.
    pub spawner: Spawner,
}

impl SimulationState {
    /// Create a state with three empty populations at tick 0.
    pub const fn empty(spawner: Spawner) -> Self {
        Self {
            tick: 0,
            predators: Population::new(Species::Predator),
            prey: Population::new(Species::Prey),
            plants: Population::new(Species::Plant),
            spawner,
        }
    }

    /// Create the tick-0 world: every species at its initial count, placed
    /// uniformly at random.
    pub fn seeded(config: &SimulationConfig, spawner: Spawner) -> Self {
        let mut state = Self::empty(spawner);
        for species in Species::ALL {
            let count = config.initial_count(species);
            let vmax = config.vmax(species);
            let population = match species {
                Species::Predator => &mut state.predators,
                Species::Prey => &mut state.prey,
                Species::Plant => &mut state.plants,
            };
            state.spawner.populate(population, count, vmax);
        }
        state
    }

    /// The population holding `species`.
    pub const fn population(&self, species: Species) -> &Population {
        match species {
            Species::Predator => &self.predators,
            Species::Prey => &self.prey,
            Species::Plant => &self.plants,
        }
    }

    /// Mutable access to the population holding `species`.
    pub const fn population_mut(&mut self, species: Species) -> &mut Population {
        match species {
            Species::Predator => &mut self.predators,
            Species::Prey => &mut self.prey,
            Species::Plant => &mut self.plants,
        }
    }

    /// Split borrow of `consumer`'s population and the population it feeds
    /// on, following [`Species::food`]. `None` for species that eat nothing.
    pub const fn feeding_pair(
        &mut self,
        consumer: Species,
    ) -> Option<(&mut Population, &mut Population)> {
        match (consumer, consumer.food()) {
            (Species::Predator, Some(Species::Prey)) => Some((&mut self.predators, &mut self.prey)),
            (Species::Prey, Some(Species::Plant)) => Some((&mut self.prey, &mut self.plants)),
            _ => None,
        }
    }

    /// Current head count of every population.
    pub fn counts(&self) -> PopulationCounts {
        PopulationCounts {
            predators: self.predators.len(),
            prey: self.prey.len(),
            plants: self.plants.len(),
        }
    }
}
