//! Corner and edge slots, and identifying which piece sits in a slot.
//!
//! The order of the slots is as follows:
//! - Corners: UFR UFL UBL UBR DFR DFL DBR DBL
//! - Edges: UB UR UF UL BL BR FR FL DF DR DB DL
//!
//! A corner slot lists its facelets clockwise as seen from outside the
//! cube, starting with the U or D facelet. An edge slot starts with its U or
//! D facelet, or with its F or B facelet for the middle layer. Piece `p` is
//! the piece that occupies slot `p` on a solved cube, and a piece's
//! orientation is the position of its first solved sticker in the reading
//! order of the slot it currently occupies.

use crate::{
    CubeError,
    facelet::{Color, FACELET_COUNT, Face, Facelet, at},
};

pub const CORNER_COUNT: usize = 8;
pub const EDGE_COUNT: usize = 12;

/// The number of distinct corner states, `8! * 3^7`.
#[allow(clippy::cast_possible_truncation)]
pub const CORNER_STATE_COUNT: u32 = FACTORIALS[CORNER_COUNT] * 3_u32.pow(CORNER_COUNT as u32 - 1);

pub const CORNER_FACELETS: [[u8; 3]; CORNER_COUNT] = {
    use Face::*;
    [
        [at(Up, 2, 2), at(Right, 0, 0), at(Front, 0, 2)],
        [at(Up, 2, 0), at(Front, 0, 0), at(Left, 0, 2)],
        [at(Up, 0, 0), at(Left, 0, 0), at(Back, 0, 2)],
        [at(Up, 0, 2), at(Back, 0, 0), at(Right, 0, 2)],
        [at(Down, 0, 2), at(Front, 2, 2), at(Right, 2, 0)],
        [at(Down, 0, 0), at(Left, 2, 2), at(Front, 2, 0)],
        [at(Down, 2, 2), at(Right, 2, 2), at(Back, 2, 0)],
        [at(Down, 2, 0), at(Back, 2, 2), at(Left, 2, 0)],
    ]
};

pub const EDGE_FACELETS: [[u8; 2]; EDGE_COUNT] = {
    use Face::*;
    [
        [at(Up, 0, 1), at(Back, 0, 1)],
        [at(Up, 1, 2), at(Right, 0, 1)],
        [at(Up, 2, 1), at(Front, 0, 1)],
        [at(Up, 1, 0), at(Left, 0, 1)],
        [at(Back, 1, 2), at(Left, 1, 0)],
        [at(Back, 1, 0), at(Right, 1, 2)],
        [at(Front, 1, 2), at(Right, 1, 0)],
        [at(Front, 1, 0), at(Left, 1, 2)],
        [at(Down, 0, 1), at(Front, 2, 1)],
        [at(Down, 1, 2), at(Right, 2, 1)],
        [at(Down, 2, 1), at(Back, 2, 1)],
        [at(Down, 1, 0), at(Left, 2, 1)],
    ]
};

/// What a facelet belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sticker {
    Center(Face),
    Corner { slot: u8, position: u8 },
    Edge { slot: u8, position: u8 },
}

#[allow(clippy::cast_possible_truncation)]
const STICKERS: [Sticker; FACELET_COUNT] = {
    let mut stickers = [Sticker::Center(Face::Up); FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        stickers[i] = Sticker::Center(Face::ALL[i / 9]);
        i += 1;
    }

    let mut slot = 0;
    while slot < CORNER_COUNT {
        let mut position = 0;
        while position < 3 {
            stickers[CORNER_FACELETS[slot][position] as usize] = Sticker::Corner {
                slot: slot as u8,
                position: position as u8,
            };
            position += 1;
        }
        slot += 1;
    }

    let mut slot = 0;
    while slot < EDGE_COUNT {
        let mut position = 0;
        while position < 2 {
            stickers[EDGE_FACELETS[slot][position] as usize] = Sticker::Edge {
                slot: slot as u8,
                position: position as u8,
            };
            position += 1;
        }
        slot += 1;
    }

    stickers
};

#[must_use]
pub fn sticker(facelet: Facelet) -> Sticker {
    STICKERS[facelet.index()]
}

/// # Errors
///
/// If `slot` is not in `0..8`.
pub fn corner_slot(slot: u8) -> Result<usize, CubeError> {
    if (slot as usize) < CORNER_COUNT {
        Ok(slot as usize)
    } else {
        Err(CubeError::CornerSlotOutOfRange(slot))
    }
}

/// # Errors
///
/// If `slot` is not in `0..12`.
pub fn edge_slot(slot: u8) -> Result<usize, CubeError> {
    if (slot as usize) < EDGE_COUNT {
        Ok(slot as usize)
    } else {
        Err(CubeError::EdgeSlotOutOfRange(slot))
    }
}

/// The color a facelet slot shows on a solved cube.
pub(crate) const fn home_color(facelet: u8) -> Color {
    Face::ALL[facelet as usize / 9].color()
}

/// The colors of a corner piece, in the reading order of its home slot.
#[must_use]
pub const fn corner_colors(piece: usize) -> [Color; 3] {
    let [a, b, c] = CORNER_FACELETS[piece];
    [home_color(a), home_color(b), home_color(c)]
}

/// The colors of an edge piece, in the reading order of its home slot.
#[must_use]
pub const fn edge_colors(piece: usize) -> [Color; 2] {
    let [a, b] = EDGE_FACELETS[piece];
    [home_color(a), home_color(b)]
}

/// Find the corner piece showing `colors` (read in slot order) and its
/// orientation. Returns `None` if no piece has these colors in this
/// cyclic order.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn identify_corner(colors: [Color; 3]) -> Option<(u8, u8)> {
    let orientation = colors
        .iter()
        .position(|&color| matches!(color, Color::White | Color::Yellow))?;
    let canonical = [
        colors[orientation],
        colors[(orientation + 1) % 3],
        colors[(orientation + 2) % 3],
    ];
    let piece = (0..CORNER_COUNT).find(|&piece| corner_colors(piece) == canonical)?;
    Some((piece as u8, orientation as u8))
}

/// Find the edge piece showing `colors` (read in slot order) and its
/// orientation.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn identify_edge(colors: [Color; 2]) -> Option<(u8, u8)> {
    (0..EDGE_COUNT).find_map(|piece| {
        let home = edge_colors(piece);
        if home == colors {
            Some((piece as u8, 0))
        } else if home == [colors[1], colors[0]] {
            Some((piece as u8, 1))
        } else {
            None
        }
    })
}

// 12! fits in a u32, 13! does not
#[allow(clippy::cast_possible_truncation)]
const FACTORIALS: [u32; 13] = {
    let mut arr = [0; 13];
    arr[0] = 1;
    let mut i = 1;
    while i < arr.len() {
        arr[i] = arr[i - 1] * i as u32;
        i += 1;
    }
    arr
};

/// The Lehmer rank of a permutation of `0..n` for `n <= 12`.
///
/// range:
/// corners: [0, 8! - 1]
/// edges: [0, 12! - 1]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn permutation_rank(perm: &[u8]) -> u32 {
    let mut rank = 0;
    for (i, &value) in perm.iter().enumerate() {
        let smaller_after = perm[i + 1..].iter().filter(|&&later| later < value).count();
        rank += smaller_after as u32 * FACTORIALS[perm.len() - i - 1];
    }
    rank
}

/// The orientation vector read as a base `orientation_count` number. The
/// last orientation is implied by the others and skipped.
///
/// range:
/// corners: [0, 3^7 - 1]
/// edges: [0, 2^11 - 1]
#[must_use]
pub fn orientation_rank(ori: &[u8], orientation_count: u8) -> u32 {
    let Some((_, determined)) = ori.split_last() else {
        return 0;
    };
    determined.iter().fold(0, |acc, &value| {
        acc * u32::from(orientation_count) + u32::from(value % orientation_count)
    })
}

/// Whether a permutation of `0..n` is odd.
#[must_use]
pub fn permutation_parity(perm: &[u8]) -> bool {
    let mut inversions = 0_usize;
    for (i, &value) in perm.iter().enumerate() {
        inversions += perm[i + 1..].iter().filter(|&&later| later < value).count();
    }
    inversions % 2 == 1
}

/// A bijection from corner states onto `0..CORNER_STATE_COUNT`, meant for
/// indexing corner pattern databases.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn corner_state_index(cp: &[u8; CORNER_COUNT], co: &[u8; CORNER_COUNT]) -> u32 {
    permutation_rank(cp) * 3_u32.pow(CORNER_COUNT as u32 - 1) + orientation_rank(co, 3)
}
