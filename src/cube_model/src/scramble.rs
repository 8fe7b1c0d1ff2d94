//! Reproducible scrambles for benchmark and test harnesses.

use crate::{CubeError, RubiksCube, moves::MoveSequence};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The longest scramble `RubiksCube::random_shuffle` agrees to generate.
pub const MAX_SCRAMBLE_MOVES: u32 = 1_000_000;

const DEFAULT_SCRAMBLE_MOVES: u32 = 25;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse the configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialize the configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("The move limit {requested} is above the hard limit of {MAX_SCRAMBLE_MOVES}")]
    LimitTooHigh { requested: u32 },
}

/// How to scramble a cube, usually loaded from a TOML table like
///
/// ```toml
/// moves = 30
/// seed = 1234
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    /// How many random moves to apply.
    pub moves: u32,
    /// Fixes the scramble. A fresh seed is drawn when this is missing.
    pub seed: Option<u64>,
    /// Refuse to scramble with more than this many moves.
    pub max_moves: u32,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig {
            moves: DEFAULT_SCRAMBLE_MOVES,
            seed: None,
            max_moves: MAX_SCRAMBLE_MOVES,
        }
    }
}

impl ScrambleConfig {
    /// # Errors
    ///
    /// If `toml` is not a valid scramble configuration, or `max_moves` is
    /// above [`MAX_SCRAMBLE_MOVES`].
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: ScrambleConfig = toml::from_str(toml)?;
        if config.max_moves > MAX_SCRAMBLE_MOVES {
            return Err(ConfigError::LimitTooHigh {
                requested: config.max_moves,
            });
        }
        debug!("Loaded scramble configuration {config:?}");
        Ok(config)
    }

    /// A random number generator seeded from the configuration, or from
    /// the global generator if no seed is configured.
    #[must_use]
    pub fn rng(&self) -> fastrand::Rng {
        fastrand::Rng::with_seed(self.seed.unwrap_or_else(|| fastrand::u64(..)))
    }
}

/// Everything needed to reproduce a scramble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleRecord {
    pub seed: u64,
    pub moves: MoveSequence,
}

impl ScrambleRecord {
    /// Apply the recorded moves to a solved cube.
    #[must_use]
    pub fn replay<C: RubiksCube>(&self) -> C {
        let mut cube = C::new_solved();
        cube.apply_moves(&self.moves);
        cube
    }

    /// # Errors
    ///
    /// If the record cannot be represented as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// # Errors
    ///
    /// If `toml` is not a valid record, including unknown move names.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }
}

/// Scramble a solved cube as described by `config`.
///
/// # Errors
///
/// If `config.moves` is above `config.max_moves` or [`MAX_SCRAMBLE_MOVES`].
pub fn scramble<C: RubiksCube>(config: &ScrambleConfig) -> Result<(C, ScrambleRecord), CubeError> {
    let limit = config.max_moves.min(MAX_SCRAMBLE_MOVES);
    if config.moves > limit {
        return Err(CubeError::ScrambleTooLong {
            requested: config.moves,
            limit,
        });
    }

    let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut cube = C::new_solved();
    let moves = cube.random_shuffle(config.moves, &mut rng)?;
    debug!("Scrambled with seed {seed}: {moves}");

    Ok((cube, ScrambleRecord { seed, moves }))
}
