//! The 18 face turns and the facelet permutations behind them.
//!
//! A face turn is a rotation of the turned face's 9 facelets plus a
//! handoff of the 3 facelet strips bordering it on the 4 neighboring faces.
//! The handoff is written out by hand in [`SIDE_STRIPS`]; everything else
//! (primes, doubles, the cubie tables in `puzzle::cubie_cube`) is derived
//! from it at compile time.

use crate::{
    CubeError,
    facelet::{FACELET_COUNT, Face, at},
};
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

/// A permutation of the 54 facelet slots. Entry `i` is the slot whose
/// color moves into slot `i`.
pub type FaceletPermutation = [u8; FACELET_COUNT];

/// Represents the direction which to turn a face. `Prime` represents
/// a counter-clockwise rotation of a face, and `Double` represents
/// a 180 degree rotation of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Normal,
    Prime,
    Double,
}

impl Direction {
    pub const ALL: [Self; 3] = [Direction::Normal, Direction::Prime, Direction::Double];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Normal => Direction::Prime,
            Direction::Prime => Direction::Normal,
            Direction::Double => Direction::Double,
        }
    }

    /// How many clockwise quarter turns this direction amounts to.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Normal => 1,
            Direction::Prime => 3,
            Direction::Double => 2,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Prime => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Move {
    L,
    LPrime,
    L2,
    R,
    RPrime,
    R2,
    U,
    UPrime,
    U2,
    D,
    DPrime,
    D2,
    F,
    FPrime,
    F2,
    B,
    BPrime,
    B2,
}

/// The turned face of each group of three moves in `Move`.
const MOVE_FACES: [Face; 6] = [
    Face::Left,
    Face::Right,
    Face::Up,
    Face::Down,
    Face::Front,
    Face::Back,
];

const MOVE_NAMES: [&str; 18] = [
    "L", "L'", "L2", "R", "R'", "R2", "U", "U'", "U2", "D", "D'", "D2", "F", "F'", "F2", "B", "B'",
    "B2",
];

impl Move {
    pub const ALL: [Self; 18] = {
        use Move::*;
        let v = [
            L, LPrime, L2, R, RPrime, R2, U, UPrime, U2, D, DPrime, D2, F, FPrime, F2, B, BPrime,
            B2,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        let group = match face {
            Face::Left => 0,
            Face::Right => 1,
            Face::Up => 2,
            Face::Down => 3,
            Face::Front => 4,
            Face::Back => 5,
        };
        Move::ALL[group * 3 + direction as usize]
    }

    #[must_use]
    pub const fn face(self) -> Face {
        MOVE_FACES[self as usize / 3]
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        Direction::ALL[self as usize % 3]
    }

    /// The move that undoes this one: `F <-> F'`, `F2 <-> F2`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Move::new(self.face(), self.direction().inverse())
    }

    /// The standard notation of the move, e.g. `"R'"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        MOVE_NAMES[self as usize]
    }

    /// Whether the move is a quarter turn in either direction.
    #[must_use]
    pub const fn is_quarter_turn(self) -> bool {
        !matches!(self.direction(), Direction::Double)
    }

    #[must_use]
    pub(crate) fn facelet_permutation(self) -> &'static FaceletPermutation {
        &FACELET_PERMUTATION_TABLE[self as usize]
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|move_| move_.name() == s)
            .ok_or_else(|| CubeError::InvalidMove(s.to_owned()))
    }
}

impl TryFrom<u8> for Move {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CubeError::InvalidMove(value.to_string()))
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(move_: Move) -> Self {
        move_.name().to_owned()
    }
}

/// A struct representing sequences of moves, used for representing
/// scramble sequences and undo sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence that undoes this one: reversed, with every move
    /// inverted.
    #[must_use]
    pub fn invert(&self) -> Self {
        self.iter().rev().map(|move_| move_.inverse()).collect()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Move> {
        self.0
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = s
            .split_whitespace()
            .map(str::parse::<Move>)
            .collect::<Result<MoveSequence, _>>()?;
        trace!("Parsed {} moves from {s:?}", moves.len());
        Ok(moves)
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// For every face, the four strips of facelets bordering it in the order a
/// clockwise quarter turn hands them off: strip `k` moves onto strip
/// `k + 1`, element by element. Indexed by `Face as usize`.
const SIDE_STRIPS: [[[u8; 3]; 4]; 6] = {
    use Face::*;
    [
        // Up
        [
            [at(Front, 0, 0), at(Front, 0, 1), at(Front, 0, 2)],
            [at(Left, 0, 0), at(Left, 0, 1), at(Left, 0, 2)],
            [at(Back, 0, 0), at(Back, 0, 1), at(Back, 0, 2)],
            [at(Right, 0, 0), at(Right, 0, 1), at(Right, 0, 2)],
        ],
        // Left
        [
            [at(Up, 0, 0), at(Up, 1, 0), at(Up, 2, 0)],
            [at(Front, 0, 0), at(Front, 1, 0), at(Front, 2, 0)],
            [at(Down, 0, 0), at(Down, 1, 0), at(Down, 2, 0)],
            [at(Back, 2, 2), at(Back, 1, 2), at(Back, 0, 2)],
        ],
        // Front
        [
            [at(Up, 2, 0), at(Up, 2, 1), at(Up, 2, 2)],
            [at(Right, 0, 0), at(Right, 1, 0), at(Right, 2, 0)],
            [at(Down, 0, 2), at(Down, 0, 1), at(Down, 0, 0)],
            [at(Left, 2, 2), at(Left, 1, 2), at(Left, 0, 2)],
        ],
        // Right
        [
            [at(Front, 0, 2), at(Front, 1, 2), at(Front, 2, 2)],
            [at(Up, 0, 2), at(Up, 1, 2), at(Up, 2, 2)],
            [at(Back, 2, 0), at(Back, 1, 0), at(Back, 0, 0)],
            [at(Down, 0, 2), at(Down, 1, 2), at(Down, 2, 2)],
        ],
        // Back
        [
            [at(Up, 0, 2), at(Up, 0, 1), at(Up, 0, 0)],
            [at(Left, 0, 0), at(Left, 1, 0), at(Left, 2, 0)],
            [at(Down, 2, 0), at(Down, 2, 1), at(Down, 2, 2)],
            [at(Right, 2, 2), at(Right, 1, 2), at(Right, 0, 2)],
        ],
        // Down
        [
            [at(Front, 2, 0), at(Front, 2, 1), at(Front, 2, 2)],
            [at(Right, 2, 0), at(Right, 2, 1), at(Right, 2, 2)],
            [at(Back, 2, 0), at(Back, 2, 1), at(Back, 2, 2)],
            [at(Left, 2, 0), at(Left, 2, 1), at(Left, 2, 2)],
        ],
    ]
};

#[allow(clippy::cast_possible_truncation)]
pub(crate) const IDENTITY: FaceletPermutation = {
    let mut arr = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        arr[i] = i as u8;
        i += 1;
    }
    arr
};

/// A clockwise quarter turn of `face`, viewed from outside that face.
#[allow(clippy::cast_possible_truncation)]
const fn quarter_turn(face: Face) -> FaceletPermutation {
    let mut from = IDENTITY;

    // (r, c) moves to (c, 2 - r)
    let base = face as usize * 9;
    let mut r = 0;
    while r < 3 {
        let mut c = 0;
        while c < 3 {
            from[base + c * 3 + (2 - r)] = (base + r * 3 + c) as u8;
            c += 1;
        }
        r += 1;
    }

    let strips = &SIDE_STRIPS[face as usize];
    let mut k = 0;
    while k < 4 {
        let src = strips[k];
        let dst = strips[(k + 1) % 4];
        let mut i = 0;
        while i < 3 {
            from[dst[i] as usize] = src[i];
            i += 1;
        }
        k += 1;
    }

    from
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn invert_permutation(perm: &FaceletPermutation) -> FaceletPermutation {
    let mut inverse = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        inverse[perm[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

/// The permutation of applying `a` and then `b`.
pub(crate) const fn compose_permutations(
    a: &FaceletPermutation,
    b: &FaceletPermutation,
) -> FaceletPermutation {
    let mut composed = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        composed[i] = a[b[i] as usize];
        i += 1;
    }
    composed
}

/// The facelet permutation of every move, indexed by `Move as usize`.
pub(crate) const FACELET_PERMUTATIONS: [FaceletPermutation; 18] = {
    let mut tables = [IDENTITY; 18];
    let mut i = 0;
    while i < Move::ALL.len() {
        let move_ = Move::ALL[i];
        let quarter = quarter_turn(move_.face());
        tables[i] = match move_.direction() {
            Direction::Normal => quarter,
            Direction::Prime => invert_permutation(&quarter),
            Direction::Double => compose_permutations(&quarter, &quarter),
        };
        i += 1;
    }
    tables
};

static FACELET_PERMUTATION_TABLE: [FaceletPermutation; 18] = FACELET_PERMUTATIONS;
