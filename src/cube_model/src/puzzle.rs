use crate::{
    CubeError,
    facelet::{Color, FACELET_COUNT, Face, Facelet},
    moves::{Move, MoveSequence},
    pieces::{
        self, CORNER_COUNT, CORNER_FACELETS, EDGE_COUNT, EDGE_FACELETS, identify_corner,
        identify_edge,
    },
    scramble::MAX_SCRAMBLE_MOVES,
};
use itertools::Itertools;
use log::debug;
use std::fmt::Debug;

pub mod cubie_cube;
pub mod facelet_cube;

macro_rules! move_primitives {
    ($($name:ident => $move_:ident),* $(,)?) => {$(
        #[doc = concat!("Apply `", stringify!($move_), "`.")]
        fn $name(&mut self) -> &mut Self {
            self.turn(Move::$move_)
        }
    )*};
}

/// The cube state interface at the heart of the model. Solvers, printers
/// and benchmark harnesses only go through this trait, so the concrete
/// representation can be swapped without touching them.
///
/// Implementors provide the solved state, a facelet color lookup and move
/// application. Everything else has a default implementation on top of
/// those three which implementors may override with something faster, as
/// long as the results agree.
pub trait RubiksCube: Clone + PartialEq + Debug {
    /// A cube in the solved state.
    fn new_solved() -> Self;

    /// The color currently shown on `facelet`.
    fn facelet_color(&self, facelet: Facelet) -> Color;

    /// Apply a single move in place. This must not be observable half way.
    fn apply_move(&mut self, move_: Move);

    /// The color at `(face, row, col)`.
    ///
    /// # Errors
    ///
    /// If `row` or `col` is not in `0..3`.
    fn get_color(&self, face: Face, row: u8, col: u8) -> Result<Color, CubeError> {
        Ok(self.facelet_color(Facelet::new(face, row, col)?))
    }

    /// The colors of all facelets, in `Facelet::index` order. Two cubes of
    /// any representations are in the same state iff these are equal.
    fn facelet_colors(&self) -> [Color; FACELET_COUNT] {
        std::array::from_fn(|i| self.facelet_color(Facelet::from_index(i)))
    }

    fn is_solved(&self) -> bool {
        Facelet::all().all(|facelet| self.facelet_color(facelet) == facelet.face().color())
    }

    /// Apply `move_` and return the cube for chaining.
    fn turn(&mut self, move_: Move) -> &mut Self {
        self.apply_move(move_);
        self
    }

    /// Apply the inverse of `move_`, undoing a previous `turn(move_)`.
    fn invert(&mut self, move_: Move) -> &mut Self {
        self.turn(move_.inverse())
    }

    fn apply_moves(&mut self, moves: &[Move]) -> &mut Self {
        for &move_ in moves {
            self.apply_move(move_);
        }
        self
    }

    move_primitives!(
        l => L, l_prime => LPrime, l2 => L2,
        r => R, r_prime => RPrime, r2 => R2,
        u => U, u_prime => UPrime, u2 => U2,
        d => D, d_prime => DPrime, d2 => D2,
        f => F, f_prime => FPrime, f2 => F2,
        b => B, b_prime => BPrime, b2 => B2,
    );

    /// Apply `times` moves drawn uniformly and independently from all 18
    /// moves, and return them in the order they were applied. Consecutive
    /// moves may cancel each other out.
    ///
    /// # Errors
    ///
    /// If `times` is larger than [`MAX_SCRAMBLE_MOVES`]. The cube is left
    /// untouched in that case.
    fn random_shuffle(
        &mut self,
        times: u32,
        rng: &mut fastrand::Rng,
    ) -> Result<MoveSequence, CubeError> {
        if times > MAX_SCRAMBLE_MOVES {
            return Err(CubeError::ScrambleTooLong {
                requested: times,
                limit: MAX_SCRAMBLE_MOVES,
            });
        }
        let moves = (0..times)
            .map(|_| Move::ALL[rng.usize(..Move::ALL.len())])
            .collect::<MoveSequence>();
        self.apply_moves(&moves);
        debug!("Shuffled cube with {} random moves", moves.len());
        Ok(moves)
    }

    /// The three colors of a corner slot in clockwise order, starting from
    /// its U or D facelet.
    ///
    /// # Errors
    ///
    /// If `slot` is not in `0..8`.
    fn corner_color_string(&self, slot: u8) -> Result<String, CubeError> {
        let colors = corner_slot_colors(self, pieces::corner_slot(slot)?);
        Ok(colors.iter().map(|color| color.letter()).collect())
    }

    /// Which corner piece occupies `slot`.
    ///
    /// # Errors
    ///
    /// If `slot` is not in `0..8`.
    fn corner_index(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(corner_piece(self, pieces::corner_slot(slot)?).0)
    }

    /// The twist of the corner piece in `slot`: which position of the slot
    /// shows the piece's white or yellow facelet.
    ///
    /// # Errors
    ///
    /// If `slot` is not in `0..8`.
    fn corner_orientation(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(corner_piece(self, pieces::corner_slot(slot)?).1)
    }

    /// # Errors
    ///
    /// If `slot` is not in `0..12`.
    fn edge_color_string(&self, slot: u8) -> Result<String, CubeError> {
        let colors = edge_slot_colors(self, pieces::edge_slot(slot)?);
        Ok(colors.iter().map(|color| color.letter()).collect())
    }

    /// # Errors
    ///
    /// If `slot` is not in `0..12`.
    fn edge_index(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(edge_piece(self, pieces::edge_slot(slot)?).0)
    }

    /// # Errors
    ///
    /// If `slot` is not in `0..12`.
    fn edge_orientation(&self, slot: u8) -> Result<u8, CubeError> {
        Ok(edge_piece(self, pieces::edge_slot(slot)?).1)
    }

    /// The corner permutation and orientation vectors, indexed by slot.
    fn corners(&self) -> ([u8; CORNER_COUNT], [u8; CORNER_COUNT]) {
        let mut cp = [0; CORNER_COUNT];
        let mut co = [0; CORNER_COUNT];
        for slot in 0..CORNER_COUNT {
            (cp[slot], co[slot]) = corner_piece(self, slot);
        }
        (cp, co)
    }

    /// The edge permutation and orientation vectors, indexed by slot.
    fn edges(&self) -> ([u8; EDGE_COUNT], [u8; EDGE_COUNT]) {
        let mut ep = [0; EDGE_COUNT];
        let mut eo = [0; EDGE_COUNT];
        for slot in 0..EDGE_COUNT {
            (ep[slot], eo[slot]) = edge_piece(self, slot);
        }
        (ep, eo)
    }

    /// See [`pieces::corner_state_index`].
    fn corner_state_index(&self) -> u32 {
        let (cp, co) = self.corners();
        pieces::corner_state_index(&cp, &co)
    }

    /// Whether the corner permutation is odd. Always equal to
    /// `edge_parity` for a reachable state.
    fn corner_parity(&self) -> bool {
        pieces::permutation_parity(&self.corners().0)
    }

    fn edge_parity(&self) -> bool {
        pieces::permutation_parity(&self.edges().0)
    }

    /// Render the cube as a net, one letter per facelet:
    ///
    /// ```text
    ///        W W W
    ///        W W W
    ///        W W W
    ///
    /// G G G  R R R  B B B  O O O
    /// G G G  R R R  B B B  O O O
    /// G G G  R R R  B B B  O O O
    ///
    ///        Y Y Y
    ///        Y Y Y
    ///        Y Y Y
    /// ```
    fn render_net(&self) -> String {
        let render_row = |faces: &[Face], row: usize| {
            faces
                .iter()
                .map(|&face| {
                    (0..3)
                        .map(|col| {
                            let facelet = Facelet::from_index(face as usize * 9 + row * 3 + col);
                            self.facelet_color(facelet).letter()
                        })
                        .join(" ")
                })
                .join("  ")
        };

        let mut net = String::new();
        for row in 0..3 {
            net.push_str(&format!("       {}\n", render_row(&[Face::Up], row)));
        }
        net.push('\n');
        for row in 0..3 {
            let middle = render_row(&[Face::Left, Face::Front, Face::Right, Face::Back], row);
            net.push_str(&format!("{middle}\n"));
        }
        net.push('\n');
        for row in 0..3 {
            net.push_str(&format!("       {}\n", render_row(&[Face::Down], row)));
        }
        net
    }

    /// Print [`RubiksCube::render_net`] to stdout.
    fn print(&self) {
        print!("{}", self.render_net());
    }
}

fn corner_slot_colors<C: RubiksCube + ?Sized>(cube: &C, slot: usize) -> [Color; 3] {
    CORNER_FACELETS[slot].map(|facelet| cube.facelet_color(Facelet::from_index(facelet as usize)))
}

fn edge_slot_colors<C: RubiksCube + ?Sized>(cube: &C, slot: usize) -> [Color; 2] {
    EDGE_FACELETS[slot].map(|facelet| cube.facelet_color(Facelet::from_index(facelet as usize)))
}

fn corner_piece<C: RubiksCube + ?Sized>(cube: &C, slot: usize) -> (u8, u8) {
    let colors = corner_slot_colors(cube, slot);
    identify_corner(colors)
        .unwrap_or_else(|| unreachable!("Corner slot {slot} shows unknown colors {colors:?}"))
}

fn edge_piece<C: RubiksCube + ?Sized>(cube: &C, slot: usize) -> (u8, u8) {
    let colors = edge_slot_colors(cube, slot);
    identify_edge(colors)
        .unwrap_or_else(|| unreachable!("Edge slot {slot} shows unknown colors {colors:?}"))
}
