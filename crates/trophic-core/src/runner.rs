//! Simulation loop runner.
//!
//! This module provides the [`Engine`], which owns the configuration and
//! the [`SimulationState`] and drives [`run_step`] until a termination
//! condition is met:
//!
//! - **Bounded simulation**: stop after `simulation.max_ticks`
//! - **Extinction**: optionally stop once predators and prey are both gone
//!
//! Around the tick loop it writes the title and position records to a
//! [`TraceSink`] and logs progress.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span};
use trophic_agents::Spawner;
use trophic_types::{PopulationCounts, TraceRecord};
use uuid::Uuid;

use crate::config::{ConfigError, SimulationConfig};
use crate::state::SimulationState;
use crate::step::{self, StepRules, StepSummary};
use crate::trace::{self, TraceError, TraceSink};

/// Errors that can occur while building or running an engine.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The configuration was rejected.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The trace sink failed.
    #[error("trace error: {source}")]
    Trace {
        /// The underlying trace error.
        #[from]
        source: TraceError,
    },
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEndReason {
    /// The configured tick count was reached.
    MaxTicksReached,
    /// Predators and prey were both extinct and early stop was enabled.
    Extinction,
}

/// Cumulative event counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    /// Prey killed by predators.
    pub prey_eaten: u64,
    /// Plants killed by prey.
    pub plants_eaten: u64,
    /// Plants added by replenishment.
    pub plants_spawned: u64,
    /// Prey offspring born.
    pub prey_births: u64,
    /// Predator offspring born.
    pub predator_births: u64,
    /// Predators removed for old age.
    pub predator_deaths: u64,
}

impl RunTotals {
    /// Fold one tick's summary into the totals.
    pub fn absorb(&mut self, summary: &StepSummary) {
        let add = |total: &mut u64, n: usize| {
            *total = total.saturating_add(u64::try_from(n).unwrap_or(u64::MAX));
        };
        add(&mut self.prey_eaten, summary.prey_eaten);
        add(&mut self.plants_eaten, summary.plants_eaten);
        add(&mut self.plants_spawned, summary.plants_spawned);
        add(&mut self.prey_births, summary.prey_births);
        add(&mut self.predator_births, summary.predator_births);
        add(&mut self.predator_deaths, summary.predator_deaths);
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Identifier of the run, as logged.
    pub run_id: Uuid,
    /// The seed the run was started from.
    pub seed: u64,
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// Number of ticks executed by this call.
    pub total_ticks: u64,
    /// Head counts after the last tick.
    pub final_counts: PopulationCounts,
    /// Event totals over the executed ticks.
    pub totals: RunTotals,
}

/// Owns the three populations and runs the tick loop.
#[derive(Debug)]
pub struct Engine {
    config: SimulationConfig,
    rules: StepRules,
    state: SimulationState,
    seed: u64,
    run_id: Uuid,
}

impl Engine {
    /// Build an engine from a configuration.
    ///
    /// Uses `world.seed` when set; otherwise draws a seed from the OS.
    pub fn new(config: SimulationConfig) -> Result<Self, RunnerError> {
        let seed = config.world.seed.unwrap_or_else(|| rand::rng().random());
        Self::with_seed(config, seed)
    }

    /// Build an engine with an explicit seed, ignoring `world.seed`.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, RunnerError> {
        config.validate()?;
        let spawner = Spawner::new(StdRng::seed_from_u64(seed), config.bounds());
        let state = SimulationState::seeded(&config, spawner);
        let rules = StepRules::from_config(&config);
        let run_id = Uuid::now_v7();
        debug!(%run_id, seed, counts = %state.counts(), "Engine initialized");
        Ok(Self {
            config,
            rules,
            state,
            seed,
            run_id,
        })
    }

    /// The configuration the engine was built from.
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The current simulation state.
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access to the state, for scripted scenarios.
    pub const fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// The seed the engine was started from.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The run identifier.
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Current head counts.
    pub fn counts(&self) -> PopulationCounts {
        self.state.counts()
    }

    /// Run a single tick.
    pub fn step(&mut self) -> StepSummary {
        step::run_step(&mut self.state, &self.rules)
    }

    /// Run the remaining ticks up to `simulation.max_ticks`.
    ///
    /// Writes the title record first, then position records for every
    /// sampled tick if `trace.emit_positions` is set.
    pub fn run(&mut self, sink: &mut dyn TraceSink) -> Result<SimulationResult, RunnerError> {
        let span = info_span!("run", run_id = %self.run_id, seed = self.seed);
        let _guard = span.enter();

        let max_ticks = self.config.simulation.max_ticks;
        let progress_every = self.config.logging.progress_interval_ticks;
        let trace_config = &self.config.trace;

        info!(
            world = %self.config.world.name,
            max_ticks,
            counts = %self.state.counts(),
            "Simulation starting"
        );

        sink.record(&TraceRecord::title(trace_config.title.as_str()))?;

        let mut totals = RunTotals::default();
        let mut total_ticks: u64 = 0;
        let mut end_reason = SimulationEndReason::MaxTicksReached;

        while self.state.tick < max_ticks {
            let summary = step::run_step(&mut self.state, &self.rules);
            total_ticks = total_ticks.saturating_add(1);
            totals.absorb(&summary);

            if trace_config.emit_positions
                && summary
                    .tick
                    .checked_rem(trace_config.position_interval_ticks.max(1))
                    == Some(0)
            {
                trace::emit_positions(sink, summary.tick, &self.state)?;
            }

            if summary.tick.checked_rem(progress_every) == Some(0) {
                info!(
                    tick = summary.tick,
                    predators = summary.counts.predators,
                    prey = summary.counts.prey,
                    plants = summary.counts.plants,
                    "Progress"
                );
            }

            if self.config.simulation.stop_on_extinction && summary.counts.mobile_extinct() {
                info!(tick = summary.tick, "Predators and prey extinct");
                end_reason = SimulationEndReason::Extinction;
                break;
            }
        }

        sink.flush()?;

        let result = SimulationResult {
            run_id: self.run_id,
            seed: self.seed,
            end_reason,
            total_ticks,
            final_counts: self.state.counts(),
            totals,
        };
        log_simulation_end(&result);
        Ok(result)
    }
}

/// Log the end of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        predators = result.final_counts.predators,
        prey = result.final_counts.prey,
        plants = result.final_counts.plants,
        prey_eaten = result.totals.prey_eaten,
        plants_eaten = result.totals.plants_eaten,
        prey_births = result.totals.prey_births,
        predator_births = result.totals.predator_births,
        predator_deaths = result.totals.predator_deaths,
        "Simulation ended"
    );
}
