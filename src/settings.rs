//! Session configuration
//!
//! Supplied once when a session starts and never changed by the simulation.
//! Loaded from JSON; any field left out takes its default from [`crate::consts`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::{BoundaryPolicy, PhaseTable};

/// Largest supported board edge
pub const MAX_GRID_SIZE: u16 = 255;

/// Game rules for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length in cells
    pub grid_size: u16,
    /// Snake length after Start/Reset
    pub initial_snake_length: u16,
    /// Tick interval after Start/Reset (ms)
    pub initial_tick_ms: u32,
    /// Floor for the tick interval (ms)
    pub min_tick_ms: u32,
    /// Base per-food speed step (ms)
    pub speed_step_ms: u32,
    /// Points per food
    pub food_score: u32,
    /// Wrap around or die at the edge
    pub boundary: BoundaryPolicy,
    /// Difficulty phases
    pub phases: PhaseTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: consts::GRID_SIZE,
            initial_snake_length: consts::INITIAL_SNAKE_LENGTH,
            initial_tick_ms: consts::INITIAL_TICK_MS,
            min_tick_ms: consts::MIN_TICK_MS,
            speed_step_ms: consts::SPEED_STEP_MS,
            food_score: consts::FOOD_SCORE,
            boundary: BoundaryPolicy::Wrap,
            phases: PhaseTable::default(),
        }
    }
}

/// Reasons a configuration is rejected
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    GridSize { size: u16 },
    SnakeLength { length: u16, grid_size: u16 },
    MinTick,
    InitialTick { initial: u32, min: u32 },
    FoodScore,
    NoPhases,
    FirstThreshold { threshold: u32 },
    UnorderedPhases { index: usize },
    ObstacleSize { phase: usize, size: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::GridSize { size } => {
                write!(f, "grid size {size} out of range (2..={MAX_GRID_SIZE})")
            }
            Self::SnakeLength { length, grid_size } => write!(
                f,
                "initial snake length {length} must be between 1 and the grid size {grid_size}"
            ),
            Self::MinTick => write!(f, "minimum tick interval must be at least 1 ms"),
            Self::InitialTick { initial, min } => write!(
                f,
                "initial tick interval {initial} ms is below the minimum {min} ms"
            ),
            Self::FoodScore => write!(f, "food score must be positive"),
            Self::NoPhases => write!(f, "phase table is empty"),
            Self::FirstThreshold { threshold } => {
                write!(f, "first phase must start at score 0, not {threshold}")
            }
            Self::UnorderedPhases { index } => write!(
                f,
                "phase {index} threshold is not above the previous phase"
            ),
            Self::ObstacleSize { phase, size } => {
                write!(f, "phase {phase} asks for obstacle size {size} that cannot fit")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
            });
        }
        if self.initial_snake_length == 0 || self.initial_snake_length > self.grid_size {
            return Err(ConfigError::SnakeLength {
                length: self.initial_snake_length,
                grid_size: self.grid_size,
            });
        }
        if self.min_tick_ms == 0 {
            return Err(ConfigError::MinTick);
        }
        if self.initial_tick_ms < self.min_tick_ms {
            return Err(ConfigError::InitialTick {
                initial: self.initial_tick_ms,
                min: self.min_tick_ms,
            });
        }
        if self.food_score == 0 {
            return Err(ConfigError::FoodScore);
        }

        let phases = self.phases.phases();
        let first = phases.first().ok_or(ConfigError::NoPhases)?;
        if first.threshold != 0 {
            return Err(ConfigError::FirstThreshold {
                threshold: first.threshold,
            });
        }
        for (index, pair) in phases.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(ConfigError::UnorderedPhases { index: index + 1 });
            }
        }
        for (phase, spec) in phases.iter().enumerate() {
            if let Some(bad) = spec
                .obstacles
                .iter()
                .find(|o| o.size == 0 || o.size > self.grid_size)
            {
                return Err(ConfigError::ObstacleSize {
                    phase,
                    size: bad.size,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ObstacleSpec, PhaseSpec};

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"grid_size": 12, "boundary": "Solid"}"#).unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.boundary, BoundaryPolicy::Solid);
        assert_eq!(config.initial_tick_ms, consts::INITIAL_TICK_MS);
        assert_eq!(config.phases, PhaseTable::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let tiny = GameConfig {
            grid_size: 1,
            ..Default::default()
        };
        assert!(matches!(tiny.validate(), Err(ConfigError::GridSize { .. })));

        let long_snake = GameConfig {
            grid_size: 5,
            initial_snake_length: 6,
            phases: PhaseTable::new(vec![PhaseSpec::at(0)]),
            ..Default::default()
        };
        assert!(matches!(
            long_snake.validate(),
            Err(ConfigError::SnakeLength { .. })
        ));

        let slow_floor = GameConfig {
            initial_tick_ms: 50,
            min_tick_ms: 80,
            ..Default::default()
        };
        assert!(matches!(
            slow_floor.validate(),
            Err(ConfigError::InitialTick { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_phase_tables() {
        let empty = GameConfig {
            phases: PhaseTable::new(Vec::new()),
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::NoPhases)));

        let late_start = GameConfig {
            phases: PhaseTable::new(vec![PhaseSpec::at(10)]),
            ..Default::default()
        };
        assert!(matches!(
            late_start.validate(),
            Err(ConfigError::FirstThreshold { threshold: 10 })
        ));

        let unordered = GameConfig {
            phases: PhaseTable::new(vec![PhaseSpec::at(0), PhaseSpec::at(50), PhaseSpec::at(50)]),
            ..Default::default()
        };
        assert!(matches!(
            unordered.validate(),
            Err(ConfigError::UnorderedPhases { index: 2 })
        ));

        let huge_block = GameConfig {
            grid_size: 8,
            phases: PhaseTable::new(vec![
                PhaseSpec::at(0),
                PhaseSpec::at(10).with_obstacles(&[ObstacleSpec::single(9)]),
            ]),
            ..Default::default()
        };
        assert!(matches!(
            huge_block.validate(),
            Err(ConfigError::ObstacleSize { phase: 1, size: 9 })
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config JSON"));
    }
}
