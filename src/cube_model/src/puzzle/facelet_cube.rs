//! The straightforward representation: one color per facelet.

use super::RubiksCube;
use crate::{
    facelet::{Color, FACELET_COUNT, Facelet},
    moves::Move,
};

/// A cube stored as the 54 facelet colors in `Facelet::index` order. A move
/// remaps the whole array through the move's facelet permutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    facelets: [Color; FACELET_COUNT],
}

impl Default for FaceletCube {
    fn default() -> Self {
        Self::new_solved()
    }
}

impl RubiksCube for FaceletCube {
    fn new_solved() -> Self {
        FaceletCube {
            facelets: std::array::from_fn(|i| Facelet::from_index(i).face().color()),
        }
    }

    fn facelet_color(&self, facelet: Facelet) -> Color {
        self.facelets[facelet.index()]
    }

    fn apply_move(&mut self, move_: Move) {
        let from = move_.facelet_permutation();
        let old = self.facelets;
        self.facelets = std::array::from_fn(|i| old[from[i] as usize]);
    }

    fn facelet_colors(&self) -> [Color; FACELET_COUNT] {
        self.facelets
    }
}
