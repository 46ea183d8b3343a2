//! Engine configuration and seed input sanitising.
//!
//! Seed coordinates and cluster size arrive from input widgets as 1-based,
//! possibly missing or malformed values. They are clamped into range rather
//! than rejected.

use serde::{Deserialize, Serialize};

use crate::automaton::{Coord, LATTICE_SIDE, MAX_CLUSTER_SIZE, MIN_CLUSTER_SIZE};
use crate::error::ConfigError;

/// 1-based axis value used when input is missing or malformed (mid-grid).
pub const DEFAULT_AXIS: i64 = 32;

/// Cluster size used when input is missing or malformed.
pub const DEFAULT_CLUSTER_SIZE: usize = 6;

/// Frames per generation for the frame-counted clock (~12 generations/s at 60 fps).
pub const DEFAULT_FRAMES_PER_GENERATION: u32 = 5;

/// How the generation clock decides when to advance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ClockMode {
    /// Advance once every `frames_per_generation` frame callbacks.
    FrameCounted { frames_per_generation: u32 },
    /// Advance once per `period_ms` of elapsed time, independent of frame rate.
    FixedPeriod { period_ms: u64 },
}

impl Default for ClockMode {
    fn default() -> Self {
        ClockMode::FrameCounted {
            frames_per_generation: DEFAULT_FRAMES_PER_GENERATION,
        }
    }
}

/// Raw seed input as supplied by a host, 1-based and possibly missing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedInput {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub z: Option<i64>,
    pub cluster_size: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the cluster RNG. `None` draws one from the thread RNG.
    pub rng_seed: Option<u64>,
    /// Generation clock behaviour.
    pub clock: ClockMode,
    /// Threads used to compute each next generation. 0 is treated as 1.
    pub worker_threads: usize,
    /// Initial seed coordinate and cluster size.
    pub seed: SeedInput,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            clock: ClockMode::default(),
            worker_threads: 1,
            seed: SeedInput::default(),
        }
    }
}

impl EngineConfig {
    /// Default config with a fixed RNG seed.
    pub fn seeded(rng_seed: u64) -> Self {
        Self {
            rng_seed: Some(rng_seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.clock {
            ClockMode::FrameCounted {
                frames_per_generation: 0,
            } => Err(ConfigError::ZeroFrameInterval),
            ClockMode::FixedPeriod { period_ms: 0 } => Err(ConfigError::ZeroPeriod),
            _ => Ok(()),
        }
    }
}

/// Sanitised seed parameters: a 0-based in-lattice seed and a valid cluster size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedParams {
    pub seed: Coord,
    pub cluster_size: usize,
}

impl Default for SeedParams {
    fn default() -> Self {
        SeedParams::from_input(&SeedInput::default())
    }
}

impl SeedParams {
    pub fn from_input(input: &SeedInput) -> Self {
        SeedParams {
            seed: Coord::new(axis(input.x), axis(input.y), axis(input.z)),
            cluster_size: cluster_size(input.cluster_size),
        }
    }

    /// Sanitise text inputs, as typed into number boxes.
    pub fn parse(x: &str, y: &str, z: &str, cluster_size: &str) -> Self {
        Self::from_input(&SeedInput {
            x: parse_int(x),
            y: parse_int(y),
            z: parse_int(z),
            cluster_size: parse_int(cluster_size),
        })
    }

    /// Pull already 0-based parameters back into range.
    pub fn sanitized(self) -> Self {
        let clamp = |v: i16| v.clamp(0, LATTICE_SIDE - 1);
        SeedParams {
            seed: Coord::new(clamp(self.seed.x), clamp(self.seed.y), clamp(self.seed.z)),
            cluster_size: self.cluster_size.clamp(MIN_CLUSTER_SIZE, MAX_CLUSTER_SIZE),
        }
    }

    /// The 1-based seed triple an input widget should display.
    pub fn display_seed(&self) -> (i64, i64, i64) {
        let shown = |v: i16| v.clamp(0, LATTICE_SIDE - 1) as i64 + 1;
        (shown(self.seed.x), shown(self.seed.y), shown(self.seed.z))
    }
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Clamp a 1-based axis value to `[1, N]` and convert it to 0-based.
pub fn axis(raw: Option<i64>) -> i16 {
    let one_based = raw.unwrap_or(DEFAULT_AXIS).clamp(1, LATTICE_SIDE as i64);
    (one_based - 1) as i16
}

/// Clamp a cluster size to `[MIN_CLUSTER_SIZE, MAX_CLUSTER_SIZE]`.
pub fn cluster_size(raw: Option<i64>) -> usize {
    raw.map_or(DEFAULT_CLUSTER_SIZE, |n| {
        n.clamp(MIN_CLUSTER_SIZE as i64, MAX_CLUSTER_SIZE as i64) as usize
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_mid_grid_and_six() {
        let params = SeedParams::default();
        assert_eq!(params.seed, Coord::new(31, 31, 31));
        assert_eq!(params.cluster_size, 6);
        assert_eq!(params.display_seed(), (32, 32, 32));
    }

    #[test]
    fn axis_is_clamped_and_zero_based() {
        assert_eq!(axis(Some(1)), 0);
        assert_eq!(axis(Some(64)), 63);
        assert_eq!(axis(Some(0)), 0);
        assert_eq!(axis(Some(-40)), 0);
        assert_eq!(axis(Some(1000)), 63);
        assert_eq!(axis(None), 31);
    }

    #[test]
    fn cluster_size_is_clamped() {
        assert_eq!(cluster_size(Some(2)), 4);
        assert_eq!(cluster_size(Some(11)), 10);
        assert_eq!(cluster_size(Some(7)), 7);
        assert_eq!(cluster_size(None), 6);
    }

    #[test]
    fn malformed_text_falls_back_to_defaults() {
        let params = SeedParams::parse("abc", "", " 10 ", "many");
        assert_eq!(params.seed, Coord::new(31, 31, 9));
        assert_eq!(params.cluster_size, 6);

        let params = SeedParams::parse("64", "1", "99", "3");
        assert_eq!(params.seed, Coord::new(63, 0, 63));
        assert_eq!(params.cluster_size, 4);
    }

    #[test]
    fn sanitized_pulls_params_into_range() {
        let params = SeedParams {
            seed: Coord::new(-3, 70, 12),
            cluster_size: 40,
        }
        .sanitized();
        assert_eq!(params.seed, Coord::new(0, 63, 12));
        assert_eq!(params.cluster_size, 10);
    }

    #[test]
    fn empty_json_gives_default_config() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(
            config.clock,
            ClockMode::FrameCounted {
                frames_per_generation: 5
            }
        );
    }

    #[test]
    fn json_config_round_trips_fields() {
        let config = EngineConfig::from_json(
            r#"{
                "rng_seed": 9,
                "clock": { "mode": "fixed_period", "period_ms": 83 },
                "worker_threads": 2,
                "seed": { "x": 1, "cluster_size": 10 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.rng_seed, Some(9));
        assert_eq!(config.clock, ClockMode::FixedPeriod { period_ms: 83 });
        assert_eq!(config.worker_threads, 2);
        let params = SeedParams::from_input(&config.seed);
        assert_eq!(params.seed, Coord::new(0, 31, 31));
        assert_eq!(params.cluster_size, 10);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(matches!(
            EngineConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "clock": { "mode": "frame_counted", "frames_per_generation": 0 } }"#),
            Err(ConfigError::ZeroFrameInterval)
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "clock": { "mode": "fixed_period", "period_ms": 0 } }"#),
            Err(ConfigError::ZeroPeriod)
        ));
    }
}
