//! Engine binary for the Trophic predator-prey simulation.
//!
//! Runs one simulation to completion and prints the final population
//! counts as `predators, prey, plants` on stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `trophic-config.yaml` (or `TROPHIC_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Open the CSV trace file at `trace.path`
//! 4. Build the engine and run the tick loop
//! 5. Log the result and print the final counts

mod csv_sink;
mod error;

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;
use trophic_core::config::{LogFormat, LoggingConfig, SimulationConfig};
use trophic_core::runner::{self, Engine};

use crate::csv_sink::CsvTraceSink;
use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "trophic-config.yaml";

/// Environment variable naming an alternative configuration file.
const ENV_CONFIG_PATH: &str = "TROPHIC_CONFIG";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging, the trace file, or the
/// simulation itself fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so report the source after.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("trophic-engine starting");
    info!(
        source = %source,
        world_name = config.world.name,
        seed = ?config.world.seed,
        max_ticks = config.simulation.max_ticks,
        trace_path = config.trace.path,
        "Configuration loaded"
    );

    // 3. Open the trace file.
    let mut sink = CsvTraceSink::create(Path::new(&config.trace.path)).map_err(EngineError::from)?;

    // 4. Build and run.
    let mut engine = Engine::new(config).map_err(EngineError::from)?;
    if engine.config().world.seed.is_none() {
        info!(seed = engine.seed(), "No seed configured, drew one");
    }
    let result = engine.run(&mut sink).map_err(EngineError::from)?;

    // 5. Report.
    runner::log_simulation_end(&result);
    info!(trace_lines = sink.lines(), "Trace written");
    println!("{}", result.final_counts);

    Ok(())
}

/// Load configuration from the file named by `TROPHIC_CONFIG`, else
/// `trophic-config.yaml`, else built-in defaults. Environment overrides
/// apply in every case.
///
/// A `TROPHIC_CONFIG` path that does not exist is an error; a missing
/// default file is not.
///
/// Returns the configuration and a description of where it came from.
fn load_config() -> Result<(SimulationConfig, String), EngineError> {
    if let Some(explicit) = std::env::var_os(ENV_CONFIG_PATH) {
        let config_path = PathBuf::from(explicit);
        let config = SimulationConfig::from_file(&config_path)?;
        return Ok((config, config_path.display().to_string()));
    }

    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, config_path.display().to_string()))
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides()?;
        Ok((config, String::from("defaults")))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level` when set.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| EngineError::Logging {
            message: format!("invalid log level {:?}: {e}", logging.level),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match logging.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| EngineError::Logging {
        message: e.to_string(),
    })
}
