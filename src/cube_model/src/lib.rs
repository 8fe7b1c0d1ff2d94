//! A model of the 3x3x3 Rubik's Cube.
//!
//! The [`RubiksCube`] trait is the contract a solver programs against:
//! facelet color queries, the 18 face turns, solved-state detection and
//! corner/edge indexing. Two representations implement it,
//! [`FaceletCube`] and [`CubieCube`], so they can be benchmarked against
//! each other without touching callers.

#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::too_many_lines)]

use thiserror::Error;

pub mod facelet;
pub mod moves;
pub mod pieces;
pub mod puzzle;
pub mod scramble;

pub use facelet::{Color, Face, Facelet};
pub use moves::{Direction, Move, MoveSequence};
pub use puzzle::{RubiksCube, cubie_cube::CubieCube, facelet_cube::FaceletCube};
pub use scramble::{ConfigError, MAX_SCRAMBLE_MOVES, ScrambleConfig, ScrambleRecord, scramble};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Row {0} is out of range, expected a value between 0 and 2")]
    RowOutOfRange(u8),
    #[error("Column {0} is out of range, expected a value between 0 and 2")]
    ColumnOutOfRange(u8),
    #[error("Corner slot {0} is out of range, expected a value between 0 and 7")]
    CornerSlotOutOfRange(u8),
    #[error("Edge slot {0} is out of range, expected a value between 0 and 11")]
    EdgeSlotOutOfRange(u8),
    #[error("Invalid move: {0:?}")]
    InvalidMove(String),
    #[error("Refusing to scramble with {requested} moves, the limit is {limit}")]
    ScrambleTooLong { requested: u32, limit: u32 },
}
