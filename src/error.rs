//! Engine error types.
//!
//! Running the automaton never fails; only building an engine can.

use thiserror::Error;

/// Errors in an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config text is not valid JSON for the config schema.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A frame-counted clock must advance after at least one frame.
    #[error("frames_per_generation must be at least 1")]
    ZeroFrameInterval,

    /// A fixed-period clock must have a non-zero period.
    #[error("period_ms must be at least 1")]
    ZeroPeriod,
}

/// Errors that can occur while building a simulation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The stepping thread pool could not be created.
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
