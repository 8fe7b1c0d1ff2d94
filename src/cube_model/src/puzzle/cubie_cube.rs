//! A module providing the cubie representation of the cube.
//!
//! The state of the cube is internally represented by four properties:
//! corner permutation, corner orientation, edge permutation and edge
//! orientation. A tuple of these four properties (with correct parity
//! relations) uniquely determines the state of the cube.

use super::RubiksCube;
use crate::{
    CubeError,
    facelet::{Color, Facelet},
    moves::{FACELET_PERMUTATIONS, FaceletPermutation, Move, invert_permutation},
    pieces::{
        self, CORNER_COUNT, CORNER_FACELETS, EDGE_COUNT, EDGE_FACELETS, Sticker, home_color,
    },
};

/// The cube as the piece and orientation in every corner and edge slot.
/// `cp[slot]` is the piece in `slot`, `co[slot]` is its orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubieCube {
    cp: [u8; CORNER_COUNT],
    co: [u8; CORNER_COUNT],
    ep: [u8; EDGE_COUNT],
    eo: [u8; EDGE_COUNT],
}

/// What a move does to the slots: slot `t` receives the piece from slot
/// `corner_from[t]`, twisted by `corner_twist[t]`.
#[derive(Debug, Clone, Copy)]
struct CubieMove {
    corner_from: [u8; CORNER_COUNT],
    corner_twist: [u8; CORNER_COUNT],
    edge_from: [u8; EDGE_COUNT],
    edge_flip: [u8; EDGE_COUNT],
}

const IDENTITY_CUBIE_MOVE: CubieMove = CubieMove {
    corner_from: [0, 1, 2, 3, 4, 5, 6, 7],
    corner_twist: [0; CORNER_COUNT],
    edge_from: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    edge_flip: [0; EDGE_COUNT],
};

/// Read the cubie action off a facelet permutation by following the first
/// facelet of every slot to where the move sends it.
#[allow(clippy::cast_possible_truncation)]
const fn cubie_move(from: &FaceletPermutation) -> CubieMove {
    let goes_to = invert_permutation(from);
    let mut cubie_move = IDENTITY_CUBIE_MOVE;

    let mut slot = 0;
    while slot < CORNER_COUNT {
        let destination = goes_to[CORNER_FACELETS[slot][0] as usize];
        let mut target = 0;
        while target < CORNER_COUNT {
            let mut position = 0;
            while position < 3 {
                if CORNER_FACELETS[target][position] == destination {
                    cubie_move.corner_from[target] = slot as u8;
                    cubie_move.corner_twist[target] = position as u8;
                }
                position += 1;
            }
            target += 1;
        }
        slot += 1;
    }

    let mut slot = 0;
    while slot < EDGE_COUNT {
        let destination = goes_to[EDGE_FACELETS[slot][0] as usize];
        let mut target = 0;
        while target < EDGE_COUNT {
            let mut position = 0;
            while position < 2 {
                if EDGE_FACELETS[target][position] == destination {
                    cubie_move.edge_from[target] = slot as u8;
                    cubie_move.edge_flip[target] = position as u8;
                }
                position += 1;
            }
            target += 1;
        }
        slot += 1;
    }

    cubie_move
}

static CUBIE_MOVES: [CubieMove; 18] = {
    let mut moves = [IDENTITY_CUBIE_MOVE; 18];
    let mut i = 0;
    while i < moves.len() {
        moves[i] = cubie_move(&FACELET_PERMUTATIONS[i]);
        i += 1;
    }
    moves
};

impl Default for CubieCube {
    fn default() -> Self {
        Self::new_solved()
    }
}

impl RubiksCube for CubieCube {
    fn new_solved() -> Self {
        CubieCube {
            cp: IDENTITY_CUBIE_MOVE.corner_from,
            co: [0; CORNER_COUNT],
            ep: IDENTITY_CUBIE_MOVE.edge_from,
            eo: [0; EDGE_COUNT],
        }
    }

    fn facelet_color(&self, facelet: Facelet) -> Color {
        match pieces::sticker(facelet) {
            Sticker::Center(face) => face.color(),
            Sticker::Corner { slot, position } => {
                let piece = self.cp[slot as usize] as usize;
                let twist = self.co[slot as usize];
                let sticker = (position + 3 - twist) % 3;
                home_color(CORNER_FACELETS[piece][sticker as usize])
            }
            Sticker::Edge { slot, position } => {
                let piece = self.ep[slot as usize] as usize;
                let flip = self.eo[slot as usize];
                let sticker = (position + flip) % 2;
                home_color(EDGE_FACELETS[piece][sticker as usize])
            }
        }
    }

    fn apply_move(&mut self, move_: Move) {
        let cubie_move = &CUBIE_MOVES[move_ as usize];
        let (cp, co, ep, eo) = (self.cp, self.co, self.ep, self.eo);
        for slot in 0..CORNER_COUNT {
            let from = cubie_move.corner_from[slot] as usize;
            self.cp[slot] = cp[from];
            self.co[slot] = (co[from] + cubie_move.corner_twist[slot]) % 3;
        }
        for slot in 0..EDGE_COUNT {
            let from = cubie_move.edge_from[slot] as usize;
            self.ep[slot] = ep[from];
            self.eo[slot] = (eo[from] + cubie_move.edge_flip[slot]) % 2;
        }
    }

    fn is_solved(&self) -> bool {
        *self == Self::new_solved()
    }

    fn corner_index(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(self.cp[pieces::corner_slot(slot)?])
    }

    fn corner_orientation(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(self.co[pieces::corner_slot(slot)?])
    }

    fn edge_index(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(self.ep[pieces::edge_slot(slot)?])
    }

    fn edge_orientation(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(self.eo[pieces::edge_slot(slot)?])
    }

    fn corners(&self) -> ([u8; CORNER_COUNT], [u8; CORNER_COUNT]) {
        (self.cp, self.co)
    }

    fn edges(&self) -> ([u8; EDGE_COUNT], [u8; EDGE_COUNT]) {
        (self.ep, self.eo)
    }
}
