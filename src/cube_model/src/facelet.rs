//! Faces, colors and the `(face, row, col)` addressing of the 54 facelets.
//!
//! Every face is addressed as if it were pointing at you, laid out on the
//! usual net:
//!
//! ```text
//!        U
//!     L  F  R  B
//!        D
//! ```
//!
//! Rows count top to bottom and columns left to right, both 0-indexed.

use crate::CubeError;
use std::{fmt, str::FromStr};

/// The number of facelets on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Orange,
    Yellow,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Up, Left, Front, Right, Back, Down];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color this face shows when the cube is solved.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::ALL[self as usize]
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Right => Face::Left,
            Face::Back => Face::Front,
            Face::Down => Face::Up,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::Up),
            "L" => Ok(Face::Left),
            "F" => Ok(Face::Front),
            "R" => Ok(Face::Right),
            "B" => Ok(Face::Back),
            "D" => Ok(Face::Down),
            _ => Err(()),
        }
    }
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Green, Red, Blue, Orange, Yellow];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The first letter of the color's name, e.g. `'G'` for green.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'W' => Some(Color::White),
            'G' => Some(Color::Green),
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'O' => Some(Color::Orange),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }

    /// The face that shows this color when the cube is solved.
    #[must_use]
    pub const fn home_face(self) -> Face {
        Face::ALL[self as usize]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A validated `(face, row, col)` address of one facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    face: Face,
    row: u8,
    col: u8,
}

impl Facelet {
    /// # Errors
    ///
    /// If `row` or `col` is not in `0..3`.
    pub fn new(face: Face, row: u8, col: u8) -> Result<Self, CubeError> {
        if row >= 3 {
            return Err(CubeError::RowOutOfRange(row));
        }
        if col >= 3 {
            return Err(CubeError::ColumnOutOfRange(col));
        }
        Ok(Facelet { face, row, col })
    }

    /// The position of this facelet in a flat 54 entry array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.face as usize * 9 + self.row as usize * 3 + self.col as usize
    }

    /// # Panics
    ///
    /// Panics if `index >= 54`.
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index < FACELET_COUNT, "Facelet index out of range");
        #[allow(clippy::cast_possible_truncation)]
        let (row, col) = ((index % 9 / 3) as u8, (index % 3) as u8);
        Facelet {
            face: Face::ALL[index / 9],
            row,
            col,
        }
    }

    /// All 54 facelets in index order.
    pub fn all() -> impl Iterator<Item = Facelet> {
        (0..FACELET_COUNT).map(Facelet::from_index)
    }

    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The middle facelet of a face, which no move displaces.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }
}

/// Flat index of `(face, row, col)` for building constant tables.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn at(face: Face, row: usize, col: usize) -> u8 {
    assert!(row < 3 && col < 3);
    (face as usize * 9 + row * 3 + col) as u8
}
