//! Configuration loading and typed config structures for the Trophic
//! simulation.
//!
//! The canonical configuration lives in `trophic-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, a loader that reads the file, and a validator that rejects
//! values the kinematics cannot work with. Every field has a default
//! matching the classic predator-prey demo, so an empty file is a valid
//! configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use trophic_agents::lifecycle::DEFAULT_OFFSPRING_JITTER;
use trophic_agents::{Kinematics, ReproductionRule, config as kin};
use trophic_types::structs::{DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};
use trophic_types::{Species, WorldBounds};

/// Environment variable overriding `world.seed`.
pub const ENV_SEED: &str = "TROPHIC_SEED";

/// Environment variable overriding `simulation.max_ticks`.
pub const ENV_MAX_TICKS: &str = "TROPHIC_MAX_TICKS";

/// Environment variable overriding `trace.path`.
pub const ENV_TRACE_PATH: &str = "TROPHIC_TRACE_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for environment variable {name}")]
    Env {
        /// The variable name.
        name: &'static str,
        /// The raw value found.
        value: String,
    },

    /// A value is outside the range the simulation can run with.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `trophic-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, size, seed).
    #[serde(default)]
    pub world: WorldConfig,

    /// Predator species parameters.
    #[serde(default)]
    pub predator: PredatorConfig,

    /// Prey species parameters.
    #[serde(default)]
    pub prey: PreyConfig,

    /// Plant species parameters.
    #[serde(default)]
    pub plant: PlantConfig,

    /// Steering, consumption, and offspring placement constants.
    #[serde(default)]
    pub kinematics: KinematicsConfig,

    /// Run length and loop toggles.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Trace output settings.
    #[serde(default)]
    pub trace: TraceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `TROPHIC_SEED` overrides `world.seed`
    /// - `TROPHIC_MAX_TICKS` overrides `simulation.max_ticks`
    /// - `TROPHIC_TRACE_PATH` overrides `trace.path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Env`] if an override does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides are
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Override fields from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Override fields from an arbitrary variable lookup.
    ///
    /// `lookup` returns the value of a variable, or `None` if unset.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse::<u64>().map_err(|_parse| ConfigError::Env {
                name: ENV_SEED,
                value: raw.clone(),
            })?;
            self.world.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_MAX_TICKS) {
            let ticks = raw.trim().parse::<u64>().map_err(|_parse| ConfigError::Env {
                name: ENV_MAX_TICKS,
                value: raw.clone(),
            })?;
            self.simulation.max_ticks = ticks;
        }
        if let Some(path) = lookup(ENV_TRACE_PATH) {
            self.trace.path = path;
        }
        Ok(())
    }

    /// Check that every numeric parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;
        non_negative("predator.vmax", self.predator.vmax)?;
        non_negative("prey.vmax", self.prey.vmax)?;
        non_negative("plant.vmax", self.plant.vmax)?;
        non_negative("kinematics.attraction_gain", self.kinematics.attraction_gain)?;
        non_negative("kinematics.integration_gain", self.kinematics.integration_gain)?;
        non_negative("kinematics.predation_radius_sq", self.kinematics.predation_radius_sq)?;
        non_negative(
            "kinematics.acquisition_radius_sq",
            self.kinematics.acquisition_radius_sq,
        )?;
        non_negative("kinematics.offspring_jitter", self.kinematics.offspring_jitter)?;
        if self.trace.position_interval_ticks == 0 {
            return Err(ConfigError::Invalid {
                field: "trace.position_interval_ticks",
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }

    /// The world rectangle.
    pub const fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world.width, self.world.height)
    }

    /// Agent update parameters.
    pub const fn kinematics(&self) -> Kinematics {
        Kinematics {
            bounds: self.bounds(),
            attraction_gain: self.kinematics.attraction_gain,
            integration_gain: self.kinematics.integration_gain,
            predation_radius_sq: self.kinematics.predation_radius_sq,
            acquisition_radius_sq: self.kinematics.acquisition_radius_sq,
            retarget_after_kill: self.kinematics.retarget_after_kill,
        }
    }

    /// Speed cap for a species.
    pub const fn vmax(&self, species: Species) -> f64 {
        match species {
            Species::Predator => self.predator.vmax,
            Species::Prey => self.prey.vmax,
            Species::Plant => self.plant.vmax,
        }
    }

    /// Number of agents of a species at tick 0.
    pub const fn initial_count(&self, species: Species) -> u32 {
        match species {
            Species::Predator => self.predator.initial_count,
            Species::Prey => self.prey.initial_count,
            Species::Plant => self.plant.initial_count,
        }
    }

    /// Reproduction rule for a species; plants only arrive by replenishment.
    pub const fn reproduction_rule(&self, species: Species) -> Option<ReproductionRule> {
        let threshold = match species {
            Species::Predator => self.predator.reproduction_threshold,
            Species::Prey => self.prey.reproduction_threshold,
            Species::Plant => return None,
        };
        Some(ReproductionRule {
            threshold,
            jitter: self.kinematics.offspring_jitter,
        })
    }

    /// Maximum age of a species; only predators die of age.
    pub const fn lifespan(&self, species: Species) -> Option<u32> {
        match species {
            Species::Predator => Some(self.predator.lifespan_ticks),
            Species::Prey | Species::Plant => None,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite and > 0, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite and >= 0, got {value}"),
        })
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name, used in logs.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// World extent along x.
    #[serde(default = "default_world_width")]
    pub width: f64,

    /// World extent along y.
    #[serde(default = "default_world_height")]
    pub height: f64,

    /// Random seed for reproducibility. When absent, a seed is drawn from
    /// the OS and logged.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            width: default_world_width(),
            height: default_world_height(),
            seed: None,
        }
    }
}

/// Predator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredatorConfig {
    /// Speed cap.
    #[serde(default = "default_predator_vmax")]
    pub vmax: f64,

    /// Number of predators at tick 0.
    #[serde(default = "default_predator_initial_count")]
    pub initial_count: u32,

    /// A predator reproduces when its energy exceeds this.
    #[serde(default = "default_predator_reproduction_threshold")]
    pub reproduction_threshold: u32,

    /// A predator is swept once its age exceeds this.
    #[serde(default = "default_predator_lifespan_ticks")]
    pub lifespan_ticks: u32,
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            vmax: default_predator_vmax(),
            initial_count: default_predator_initial_count(),
            reproduction_threshold: default_predator_reproduction_threshold(),
            lifespan_ticks: default_predator_lifespan_ticks(),
        }
    }
}

/// Prey parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreyConfig {
    /// Speed cap.
    #[serde(default = "default_prey_vmax")]
    pub vmax: f64,

    /// Number of prey at tick 0.
    #[serde(default = "default_prey_initial_count")]
    pub initial_count: u32,

    /// A prey reproduces when its energy exceeds this.
    #[serde(default = "default_prey_reproduction_threshold")]
    pub reproduction_threshold: u32,
}

impl Default for PreyConfig {
    fn default() -> Self {
        Self {
            vmax: default_prey_vmax(),
            initial_count: default_prey_initial_count(),
            reproduction_threshold: default_prey_reproduction_threshold(),
        }
    }
}

/// Plant parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantConfig {
    /// Speed cap; plants are immobile by default.
    #[serde(default)]
    pub vmax: f64,

    /// Number of plants at tick 0.
    #[serde(default = "default_plant_initial_count")]
    pub initial_count: u32,

    /// New plants added every tick, independent of how many were eaten.
    #[serde(default = "default_plant_replenish_per_tick")]
    pub replenish_per_tick: u32,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            vmax: 0.0,
            initial_count: default_plant_initial_count(),
            replenish_per_tick: default_plant_replenish_per_tick(),
        }
    }
}

/// Steering and consumption constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicsConfig {
    /// Force = gain * (target - position).
    #[serde(default = "default_attraction_gain")]
    pub attraction_gain: f64,

    /// Velocity += gain * force.
    #[serde(default = "default_integration_gain")]
    pub integration_gain: f64,

    /// Squared distance below which a locked target is eaten.
    #[serde(default = "default_predation_radius_sq")]
    pub predation_radius_sq: f64,

    /// Squared distance below which the nearest candidate is locked.
    #[serde(default = "default_acquisition_radius_sq")]
    pub acquisition_radius_sq: f64,

    /// Per-axis offspring placement range around the parent.
    #[serde(default = "default_offspring_jitter")]
    pub offspring_jitter: f64,

    /// Re-acquire a target in the same update that ate the previous one.
    #[serde(default = "default_true")]
    pub retarget_after_kill: bool,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            attraction_gain: default_attraction_gain(),
            integration_gain: default_integration_gain(),
            predation_radius_sq: default_predation_radius_sq(),
            acquisition_radius_sq: default_acquisition_radius_sq(),
            offspring_jitter: default_offspring_jitter(),
            retarget_after_kill: true,
        }
    }
}

/// Run length and loop toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Number of ticks to run.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// End early once predators and prey are both extinct.
    #[serde(default)]
    pub stop_on_extinction: bool,

    /// Run the plant update pass (ages plants; they never move).
    #[serde(default)]
    pub update_plants: bool,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            stop_on_extinction: false,
            update_plants: false,
        }
    }
}

/// Trace output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Description written as the title record.
    #[serde(default = "default_trace_title")]
    pub title: String,

    /// Emit one position record per agent per sampled tick.
    #[serde(default)]
    pub emit_positions: bool,

    /// Sample positions every N ticks.
    #[serde(default = "default_position_interval_ticks")]
    pub position_interval_ticks: u64,

    /// Destination file for the CSV trace.
    #[serde(default = "default_trace_path")]
    pub path: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            title: default_trace_title(),
            emit_positions: false,
            position_interval_ticks: default_position_interval_ticks(),
            path: default_trace_path(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,

    /// Log population counts every N ticks (0 = never).
    #[serde(default = "default_progress_interval_ticks")]
    pub progress_interval_ticks: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
            progress_interval_ticks: default_progress_interval_ticks(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Predator Prey Relationship".to_owned()
}

const fn default_world_width() -> f64 {
    DEFAULT_WORLD_WIDTH
}

const fn default_world_height() -> f64 {
    DEFAULT_WORLD_HEIGHT
}

const fn default_predator_vmax() -> f64 {
    2.5
}

const fn default_predator_initial_count() -> u32 {
    10
}

const fn default_predator_reproduction_threshold() -> u32 {
    10
}

const fn default_predator_lifespan_ticks() -> u32 {
    2000
}

const fn default_prey_vmax() -> f64 {
    2.0
}

const fn default_prey_initial_count() -> u32 {
    10
}

const fn default_prey_reproduction_threshold() -> u32 {
    5
}

const fn default_plant_initial_count() -> u32 {
    100
}

const fn default_plant_replenish_per_tick() -> u32 {
    2
}

const fn default_attraction_gain() -> f64 {
    kin::DEFAULT_ATTRACTION_GAIN
}

const fn default_integration_gain() -> f64 {
    kin::DEFAULT_INTEGRATION_GAIN
}

const fn default_predation_radius_sq() -> f64 {
    kin::DEFAULT_PREDATION_RADIUS_SQ
}

const fn default_acquisition_radius_sq() -> f64 {
    kin::DEFAULT_ACQUISITION_RADIUS_SQ
}

const fn default_offspring_jitter() -> f64 {
    DEFAULT_OFFSPRING_JITTER
}

const fn default_max_ticks() -> u64 {
    10_000
}

fn default_trace_title() -> String {
    "Predator Prey Relationship / Trophic / Rust".to_owned()
}

const fn default_position_interval_ticks() -> u64 {
    1
}

fn default_trace_path() -> String {
    "output.csv".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_progress_interval_ticks() -> u64 {
    1000
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_demo() {
        let config = SimulationConfig::default();
        assert_eq!(config.initial_count(Species::Predator), 10);
        assert_eq!(config.initial_count(Species::Prey), 10);
        assert_eq!(config.initial_count(Species::Plant), 100);
        assert_eq!(config.plant.replenish_per_tick, 2);
        assert_eq!(config.lifespan(Species::Predator), Some(2000));
        assert_eq!(config.lifespan(Species::Prey), None);
        assert_eq!(config.simulation.max_ticks, 10_000);
        assert!(!config.trace.emit_positions);
        assert!(config.world.seed.is_none());
        assert!(config.validate().is_ok());

        let bounds = config.bounds();
        assert!((bounds.width - 2560.0).abs() < f64::EPSILON);
        assert!((bounds.height - 1440.0).abs() < f64::EPSILON);
        assert!((config.vmax(Species::Predator) - 2.5).abs() < f64::EPSILON);
        assert!((config.vmax(Species::Prey) - 2.0).abs() < f64::EPSILON);
        assert!(config.vmax(Species::Plant).abs() < f64::EPSILON);
    }

    #[test]
    fn reproduction_rules() {
        let config = SimulationConfig::default();
        let prey = config.reproduction_rule(Species::Prey);
        assert_eq!(prey.map(|r| r.threshold), Some(5));
        let predator = config.reproduction_rule(Species::Predator);
        assert_eq!(predator.map(|r| r.threshold), Some(10));
        assert!(config.reproduction_rule(Species::Plant).is_none());
    }

    #[test]
    fn kinematics_defaults_flow_through() {
        let config = SimulationConfig::default();
        assert_eq!(config.kinematics(), Kinematics::default());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  name: "Small pond"
  width: 800.0
  height: 600.0
  seed: 123

predator:
  vmax: 3.0
  initial_count: 4
  reproduction_threshold: 8
  lifespan_ticks: 1500

prey:
  vmax: 1.5
  initial_count: 30
  reproduction_threshold: 3

plant:
  initial_count: 50
  replenish_per_tick: 5

kinematics:
  attraction_gain: 0.2
  integration_gain: 0.1
  predation_radius_sq: 225.0
  acquisition_radius_sq: 50000.0
  offspring_jitter: 10.0
  retarget_after_kill: false

simulation:
  max_ticks: 500
  stop_on_extinction: true
  update_plants: true

trace:
  title: "pond run"
  emit_positions: true
  position_interval_ticks: 10
  path: "pond.csv"

logging:
  level: "debug"
  format: json
  progress_interval_ticks: 0
"#;

        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.world.name, "Small pond");
        assert_eq!(config.world.seed, Some(123));
        assert_eq!(config.predator.lifespan_ticks, 1500);
        assert_eq!(config.prey.initial_count, 30);
        assert_eq!(config.plant.replenish_per_tick, 5);
        assert!(!config.kinematics.retarget_after_kill);
        assert!(config.simulation.stop_on_extinction);
        assert!(config.simulation.update_plants);
        assert_eq!(config.trace.position_interval_ticks, 10);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = SimulationConfig::parse("world:\n  seed: 7\n");
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.predator, PredatorConfig::default());
        assert_eq!(config.simulation.max_ticks, 10_000);
    }

    #[test]
    fn parse_partial_species_keeps_other_defaults() {
        let config = SimulationConfig::parse("prey:\n  vmax: 0.0\n")
            .ok()
            .unwrap_or_default();
        assert!(config.prey.vmax.abs() < f64::EPSILON);
        assert_eq!(config.prey.initial_count, 10);
        assert_eq!(config.prey.reproduction_threshold, 5);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulationConfig::parse("");
        assert!(config.is_ok());
        assert_eq!(config.ok(), Some(SimulationConfig::default()));
    }

    #[test]
    fn parse_rejects_garbage() {
        let config = SimulationConfig::parse("world: [1, 2");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn validate_rejects_bad_world() {
        let mut config = SimulationConfig::default();
        config.world.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "world.width", .. })
        ));

        let mut config = SimulationConfig::default();
        config.world.height = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "world.height", .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_speed_and_radius() {
        let mut config = SimulationConfig::default();
        config.prey.vmax = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "prey.vmax", .. })
        ));

        let mut config = SimulationConfig::default();
        config.kinematics.predation_radius_sq = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "kinematics.predation_radius_sq", .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_position_interval() {
        let mut config = SimulationConfig::default();
        config.trace.position_interval_ticks = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn overrides_apply() {
        let mut config = SimulationConfig::default();
        let result = config.apply_overrides(|name| match name {
            ENV_SEED => Some("99".to_owned()),
            ENV_MAX_TICKS => Some(" 250 ".to_owned()),
            ENV_TRACE_PATH => Some("/tmp/trace.csv".to_owned()),
            _ => None,
        });
        assert!(result.is_ok());
        assert_eq!(config.world.seed, Some(99));
        assert_eq!(config.simulation.max_ticks, 250);
        assert_eq!(config.trace.path, "/tmp/trace.csv");
    }

    #[test]
    fn overrides_reject_unparseable_seed() {
        let mut config = SimulationConfig::default();
        let result = config.apply_overrides(|name| (name == ENV_SEED).then(|| "abc".to_owned()));
        assert!(matches!(result, Err(ConfigError::Env { name: ENV_SEED, .. })));
        assert!(config.world.seed.is_none());
    }

    #[test]
    fn log_format_serializes_lowercase() {
        let mut config = SimulationConfig::default();
        config.logging.format = LogFormat::Json;
        let value = serde_json::to_value(&config).ok();
        let format = value
            .as_ref()
            .and_then(|v| v.pointer("/logging/format"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(format, Some("json"));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("trophic-config.yaml");
        if path.exists() {
            let config = std::fs::read_to_string(&path)
                .map_err(ConfigError::from)
                .and_then(|contents| SimulationConfig::parse(&contents));
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
            assert!(config.is_ok_and(|c| c.validate().is_ok()));
        }
    }
}
