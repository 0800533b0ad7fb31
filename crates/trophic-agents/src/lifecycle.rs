//! Death sweeps and reproduction passes.
//!
//! Agents die in one of two ways:
//! - Eaten: a consumer flagged them dead during the tick's update passes.
//! - Old age: their age exceeds their species' lifespan (predators only by
//!   default).
//!
//! Reproduction is energy-driven: a parent over its species threshold
//! spends all of its energy on exactly one offspring placed near it.

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::population::Population;
use crate::spawn::Spawner;

/// Default per-axis offspring jitter in world units.
pub const DEFAULT_OFFSPRING_JITTER: f64 = 20.0;

/// The cause of an agent's death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// Another agent consumed it.
    Eaten,
    /// Its age exceeded the configured lifespan.
    OldAge,
}

impl core::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Eaten => write!(f, "eaten"),
            Self::OldAge => write!(f, "old_age"),
        }
    }
}

/// Check whether an agent meets any death condition.
///
/// Returns `Some(cause)` if the agent should be swept, `None` otherwise.
/// Being eaten takes precedence over old age. A `lifespan` of `None` means
/// the species never dies of age.
pub const fn check_death(agent: &Agent, lifespan: Option<u32>) -> Option<DeathCause> {
    if !agent.alive {
        return Some(DeathCause::Eaten);
    }
    if let Some(limit) = lifespan {
        if agent.age > limit {
            return Some(DeathCause::OldAge);
        }
    }
    None
}

/// Number of agents removed by a sweep, by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Agents removed because they were eaten.
    pub eaten: usize,
    /// Agents removed because they outlived their lifespan.
    pub old_age: usize,
}

impl SweepReport {
    /// Total agents removed.
    pub const fn total(&self) -> usize {
        self.eaten.saturating_add(self.old_age)
    }
}

/// Remove every agent in `population` that meets a death condition.
pub fn sweep(population: &mut Population, lifespan: Option<u32>) -> SweepReport {
    let mut report = SweepReport::default();
    population.sweep(|agent| match check_death(agent, lifespan) {
        Some(DeathCause::Eaten) => {
            report.eaten = report.eaten.saturating_add(1);
            true
        }
        Some(DeathCause::OldAge) => {
            report.old_age = report.old_age.saturating_add(1);
            true
        }
        None => false,
    });
    if report.total() > 0 {
        tracing::trace!(
            species = %population.species(),
            eaten = report.eaten,
            old_age = report.old_age,
            "Population swept"
        );
    }
    report
}

/// When and how a species reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReproductionRule {
    /// A parent reproduces when its energy is strictly greater than this.
    pub threshold: u32,
    /// Offspring land within this many units of the parent on each axis.
    pub jitter: f64,
}

impl ReproductionRule {
    /// Whether `agent` qualifies as a parent.
    pub const fn is_ready(&self, agent: &Agent) -> bool {
        agent.alive && agent.energy > self.threshold
    }
}

/// Run one reproduction pass over `population` and return the birth count.
///
/// Every qualifying parent has its energy reset to 0 and gets exactly one
/// offspring appended. Offspring are appended after the scan, so they are
/// never themselves examined in the same pass.
pub fn reproduce(
    population: &mut Population,
    rule: &ReproductionRule,
    spawner: &mut Spawner,
) -> usize {
    let mut offspring = Vec::new();
    for parent in population.agents_mut() {
        if rule.is_ready(parent) {
            parent.energy = 0;
            offspring.push(spawner.spawn_offspring(parent, rule.jitter));
        }
    }

    let births = offspring.len();
    for child in offspring {
        tracing::trace!(id = %child.id, species = %child.species, "Offspring born");
        population.push(child);
    }
    births
}
