//! Error types for the engine binary.

use trophic_core::config::ConfigError;
use trophic_core::runner::RunnerError;
use trophic_core::trace::TraceError;

/// Top-level error for the engine binary.
///
/// Each variant wraps one subsystem error so `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The simulation could not be built or run.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: RunnerError,
    },

    /// The trace file could not be opened.
    #[error("trace error: {source}")]
    Trace {
        /// The underlying trace error.
        #[from]
        source: TraceError,
    },

    /// Logging could not be initialized.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the failure.
        message: String,
    },
}
