//! One simulation tick: trophic passes, sweeps, and births.
//!
//! Each tick runs the same fixed sequence. The order matters: it decides
//! who can react to whom within the same tick.
//!
//! 1. **Predator pass** -- every predator updates against the prey.
//! 2. **Prey pass** -- every prey updates against the plants. Prey eaten in
//!    step 1 still take their turn; they are only removed in step 5.
//! 3. **Plant pass** -- skipped unless `simulation.update_plants` is set.
//! 4. **Plants** -- sweep the eaten, then add the fixed replenishment.
//! 5. **Prey** -- sweep the eaten.
//! 6. **Prey births** -- one offspring per prey over its energy threshold.
//! 7. **Predators** -- sweep those past their lifespan.
//! 8. **Predator births** -- one offspring per predator over its threshold.

use trophic_agents::{Kinematics, Population, ReproductionRule, lifecycle};
use trophic_types::{PopulationCounts, Species};

use crate::config::SimulationConfig;
use crate::state::SimulationState;

/// Parameters for [`run_step`], resolved once from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRules {
    /// Agent update parameters.
    pub kinematics: Kinematics,
    /// Prey reproduction rule.
    pub prey_reproduction: ReproductionRule,
    /// Predator reproduction rule.
    pub predator_reproduction: ReproductionRule,
    /// Predator maximum age.
    pub predator_lifespan: Option<u32>,
    /// Speed cap given to replenished plants.
    pub plant_vmax: f64,
    /// Plants added per tick.
    pub plant_replenish: u32,
    /// Whether plants run their (age-only) update.
    pub update_plants: bool,
}

impl StepRules {
    /// Resolve step parameters from a configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let fallback = ReproductionRule {
            threshold: u32::MAX,
            jitter: config.kinematics.offspring_jitter,
        };
        Self {
            kinematics: config.kinematics(),
            prey_reproduction: config.reproduction_rule(Species::Prey).unwrap_or(fallback),
            predator_reproduction: config
                .reproduction_rule(Species::Predator)
                .unwrap_or(fallback),
            predator_lifespan: config.lifespan(Species::Predator),
            plant_vmax: config.vmax(Species::Plant),
            plant_replenish: config.plant.replenish_per_tick,
            update_plants: config.simulation.update_plants,
        }
    }
}

impl Default for StepRules {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// The tick number that was executed (0-based).
    pub tick: u64,
    /// Prey killed by predators this tick.
    pub prey_eaten: usize,
    /// Plants killed by prey this tick.
    pub plants_eaten: usize,
    /// Plants added by replenishment.
    pub plants_spawned: usize,
    /// Prey offspring born.
    pub prey_births: usize,
    /// Predator offspring born.
    pub predator_births: usize,
    /// Predators removed for exceeding their lifespan.
    pub predator_deaths: usize,
    /// Head counts after the tick.
    pub counts: PopulationCounts,
}

/// Execute one complete tick and advance `state.tick`.
pub fn run_step(state: &mut SimulationState, rules: &StepRules) -> StepSummary {
    let tick = state.tick;

    // --- 1-3: update passes, top of the food chain first ---
    let mut prey_eaten: usize = 0;
    let mut plants_eaten: usize = 0;
    for consumer in Species::ALL {
        if let Some((consumers, food)) = state.feeding_pair(consumer) {
            let kills = trophic_pass(consumers, food, &rules.kinematics);
            match food.species() {
                Species::Prey => prey_eaten = kills,
                Species::Plant => plants_eaten = kills,
                Species::Predator => {}
            }
        } else if rules.update_plants {
            let barren = Population::new(consumer);
            for agent in state.population_mut(consumer).agents_mut() {
                let _ = agent.update(&barren, &rules.kinematics);
            }
        }
    }

    // --- 4: plants ---
    lifecycle::sweep(&mut state.plants, None);
    state
        .spawner
        .populate(&mut state.plants, rules.plant_replenish, rules.plant_vmax);

    // --- 5-6: prey ---
    lifecycle::sweep(&mut state.prey, None);
    let prey_births =
        lifecycle::reproduce(&mut state.prey, &rules.prey_reproduction, &mut state.spawner);

    // --- 7-8: predators ---
    let predator_deaths = lifecycle::sweep(&mut state.predators, rules.predator_lifespan).old_age;
    let predator_births = lifecycle::reproduce(
        &mut state.predators,
        &rules.predator_reproduction,
        &mut state.spawner,
    );

    state.tick = state.tick.saturating_add(1);

    let summary = StepSummary {
        tick,
        prey_eaten,
        plants_eaten,
        plants_spawned: usize::try_from(rules.plant_replenish).unwrap_or(usize::MAX),
        prey_births,
        predator_births,
        predator_deaths,
        counts: state.counts(),
    };
    tracing::debug!(
        tick,
        predators = summary.counts.predators,
        prey = summary.counts.prey,
        plants = summary.counts.plants,
        prey_eaten,
        plants_eaten,
        prey_births,
        predator_births,
        predator_deaths,
        "Tick complete"
    );
    summary
}

/// Update every consumer against its food and apply kills as they happen.
///
/// A kill is applied before the next consumer updates, so a victim can be
/// claimed at most once per pass. Returns the number of kills.
fn trophic_pass(consumers: &mut Population, food: &mut Population, kinematics: &Kinematics) -> usize {
    let mut kills: usize = 0;
    for consumer in consumers.agents_mut() {
        let outcome = consumer.update(food, kinematics);
        if let Some(victim) = outcome.consumed {
            if food.mark_dead(victim) {
                kills = kills.saturating_add(1);
            }
        }
    }
    kills
}
