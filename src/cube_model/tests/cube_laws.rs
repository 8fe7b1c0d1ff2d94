use cube_model::{
    Color, CubeError, CubieCube, Face, FaceletCube, MAX_SCRAMBLE_MOVES, Move, MoveSequence,
    RubiksCube, ScrambleConfig,
    pieces::{CORNER_COUNT, CORNER_STATE_COUNT, EDGE_COUNT, corner_colors, edge_colors},
    scramble,
};
use itertools::Itertools;
use log::info;

const SEEDS: [u64; 4] = [0, 1, 42, 0xC0FFEE];

fn scrambled<C: RubiksCube>(seed: u64, moves: u32) -> C {
    let mut cube = C::new_solved();
    let mut rng = fastrand::Rng::with_seed(seed);
    cube.random_shuffle(moves, &mut rng).unwrap();
    cube
}

fn scrambled_states<C: RubiksCube>() -> impl Iterator<Item = C> {
    SEEDS
        .into_iter()
        .cartesian_product([1, 7, 40])
        .map(|(seed, moves)| scrambled(seed, moves))
}

fn color_conservation<C: RubiksCube>() {
    for cube in scrambled_states::<C>() {
        let counts = cube.facelet_colors().into_iter().counts();
        assert_eq!(counts.len(), 6);
        for color in Color::ALL {
            assert_eq!(counts[&color], 9, "{color} in {cube:?}");
        }
    }
}

fn inverse_law<C: RubiksCube>() {
    for start in scrambled_states::<C>() {
        for move_ in Move::ALL {
            assert_eq!(move_.inverse().inverse(), move_);

            let mut cube = start.clone();
            cube.turn(move_).invert(move_);
            assert_eq!(cube, start, "{move_} then its inverse");

            let mut cube = start.clone();
            cube.invert(move_).turn(move_);
            assert_eq!(cube, start, "inverse of {move_} then {move_}");
        }
    }
}

fn order_law<C: RubiksCube>() {
    for start in scrambled_states::<C>() {
        for move_ in Move::ALL {
            let order = if move_.is_quarter_turn() { 4 } else { 2 };
            let mut cube = start.clone();
            for i in 1..=order {
                cube.turn(move_);
                assert_eq!(cube == start, i == order, "{move_} applied {i} times");
            }
        }
    }
}

fn solved_identity<C: RubiksCube>() {
    assert!(C::new_solved().is_solved());
    for move_ in Move::ALL {
        let mut cube = C::new_solved();
        cube.turn(move_);
        assert!(!cube.is_solved(), "{move_}");
    }

    let sexy_move: MoveSequence = "R U R' U'".parse().unwrap();
    let mut cube = C::new_solved();
    for i in 1..=6 {
        cube.apply_moves(&sexy_move);
        assert_eq!(cube.is_solved(), i == 6);
    }
}

fn orientation_and_parity_invariants<C: RubiksCube>() {
    for cube in scrambled_states::<C>() {
        let corner_twist: u32 = (0..CORNER_COUNT as u8)
            .map(|slot| u32::from(cube.corner_orientation(slot).unwrap()))
            .sum();
        assert_eq!(corner_twist % 3, 0);

        let edge_flip: u32 = (0..EDGE_COUNT as u8)
            .map(|slot| u32::from(cube.edge_orientation(slot).unwrap()))
            .sum();
        assert_eq!(edge_flip % 2, 0);

        assert_eq!(cube.corner_parity(), cube.edge_parity());

        let (cp, _) = cube.corners();
        assert!(cp.iter().copied().sorted().eq(0..CORNER_COUNT as u8));
        let (ep, _) = cube.edges();
        assert!(ep.iter().copied().sorted().eq(0..EDGE_COUNT as u8));
    }
}

fn piece_queries_match_stickers<C: RubiksCube>() {
    for cube in scrambled_states::<C>() {
        for slot in 0..CORNER_COUNT as u8 {
            let piece = cube.corner_index(slot).unwrap() as usize;
            let twist = cube.corner_orientation(slot).unwrap() as usize;
            let colors = corner_colors(piece);
            let expected: String = (0..3)
                .map(|position| colors[(position + 3 - twist) % 3].letter())
                .collect();
            assert_eq!(cube.corner_color_string(slot).unwrap(), expected);
        }
        for slot in 0..EDGE_COUNT as u8 {
            let piece = cube.edge_index(slot).unwrap() as usize;
            let flip = cube.edge_orientation(slot).unwrap() as usize;
            let colors = edge_colors(piece);
            let expected: String = (0..2)
                .map(|position| colors[(position + flip) % 2].letter())
                .collect();
            assert_eq!(cube.edge_color_string(slot).unwrap(), expected);
        }
        assert!(cube.corner_state_index() < CORNER_STATE_COUNT);
    }
    assert_eq!(C::new_solved().corner_state_index(), 0);
}

fn out_of_range_queries<C: RubiksCube>() {
    let cube = C::new_solved();
    assert_eq!(cube.get_color(Face::Up, 3, 0), Err(CubeError::RowOutOfRange(3)));
    assert_eq!(cube.get_color(Face::Down, 0, 200), Err(CubeError::ColumnOutOfRange(200)));
    assert_eq!(cube.corner_index(8), Err(CubeError::CornerSlotOutOfRange(8)));
    assert_eq!(cube.corner_orientation(255), Err(CubeError::CornerSlotOutOfRange(255)));
    assert_eq!(cube.corner_color_string(8), Err(CubeError::CornerSlotOutOfRange(8)));
    assert_eq!(cube.edge_index(12), Err(CubeError::EdgeSlotOutOfRange(12)));
    assert_eq!(cube.edge_color_string(12), Err(CubeError::EdgeSlotOutOfRange(12)));
}

fn scramble_reproducibility<C: RubiksCube>() {
    for seed in SEEDS {
        let mut cube = C::new_solved();
        let moves = cube
            .random_shuffle(50, &mut fastrand::Rng::with_seed(seed))
            .unwrap();
        assert_eq!(moves.len(), 50);

        let mut replayed = C::new_solved();
        replayed.apply_moves(&moves);
        assert_eq!(replayed, cube);

        let mut undone = cube.clone();
        undone.apply_moves(&moves.invert());
        assert!(undone.is_solved());

        let config = ScrambleConfig {
            moves: 50,
            seed: Some(seed),
            ..Default::default()
        };
        let (from_config, record) = scramble::<C>(&config).unwrap();
        assert_eq!(record.seed, seed);
        assert_eq!(record.moves, moves);
        assert_eq!(from_config, cube);
        assert_eq!(record.replay::<C>(), cube);
    }

    let mut cube = C::new_solved();
    assert!(cube.random_shuffle(0, &mut fastrand::Rng::new()).unwrap().is_empty());
    assert!(cube.is_solved());
}

fn oversized_shuffle_is_rejected<C: RubiksCube>() {
    let mut cube: C = scrambled(3, 12);
    let before = cube.clone();
    let mut rng = fastrand::Rng::with_seed(3);
    assert_eq!(
        cube.random_shuffle(MAX_SCRAMBLE_MOVES + 1, &mut rng),
        Err(CubeError::ScrambleTooLong {
            requested: MAX_SCRAMBLE_MOVES + 1,
            limit: MAX_SCRAMBLE_MOVES,
        })
    );
    assert_eq!(cube, before);
}

fn scenarios<C: RubiksCube>() {
    let mut cube = C::new_solved();
    let before = cube.get_color(Face::Left, 0, 2).unwrap();
    cube.f();
    assert_eq!(cube.get_color(Face::Up, 2, 0), Ok(before));

    let mut cube = C::new_solved();
    cube.u().u().u();
    assert!(!cube.is_solved());
    cube.u();
    assert!(cube.is_solved());

    let solved = C::new_solved();
    let mut cube = solved.clone();
    cube.r().r_prime();
    assert_eq!(cube.facelet_colors(), solved.facelet_colors());
    assert_eq!(cube, solved);
}

fn primitives_match_moves<C: RubiksCube>() {
    let primitives: [fn(&mut C) -> &mut C; 18] = [
        C::l, C::l_prime, C::l2, C::r, C::r_prime, C::r2,
        C::u, C::u_prime, C::u2, C::d, C::d_prime, C::d2,
        C::f, C::f_prime, C::f2, C::b, C::b_prime, C::b2,
    ];
    let start: C = scrambled(7, 20);
    for (primitive, move_) in primitives.into_iter().zip(Move::ALL) {
        let mut by_primitive = start.clone();
        primitive(&mut by_primitive);
        let mut by_move = start.clone();
        by_move.apply_move(move_);
        assert_eq!(by_primitive, by_move, "{move_}");
    }
}

macro_rules! cube_law_tests {
    ($($law:ident),* $(,)?) => {
        mod facelet_cube {
            use super::*;
            $(
                #[test_log::test]
                fn $law() {
                    super::$law::<FaceletCube>();
                }
            )*
        }

        mod cubie_cube {
            use super::*;
            $(
                #[test_log::test]
                fn $law() {
                    super::$law::<CubieCube>();
                }
            )*
        }
    };
}

cube_law_tests!(
    color_conservation,
    inverse_law,
    order_law,
    solved_identity,
    orientation_and_parity_invariants,
    piece_queries_match_stickers,
    out_of_range_queries,
    scramble_reproducibility,
    oversized_shuffle_is_rejected,
    scenarios,
    primitives_match_moves,
);

#[test_log::test]
fn test_representations_agree() {
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut facelet_cube = FaceletCube::new_solved();
        let mut cubie_cube = CubieCube::new_solved();
        for _ in 0..200 {
            let move_ = *rng.choice(&Move::ALL).unwrap();
            facelet_cube.turn(move_);
            cubie_cube.turn(move_);
            assert_eq!(facelet_cube.facelet_colors(), cubie_cube.facelet_colors());
            assert_eq!(facelet_cube.corners(), cubie_cube.corners());
            assert_eq!(facelet_cube.edges(), cubie_cube.edges());
            assert_eq!(facelet_cube.is_solved(), cubie_cube.is_solved());
            assert_eq!(
                facelet_cube.corner_state_index(),
                cubie_cube.corner_state_index()
            );
        }
        info!("Seed {seed} agrees after 200 moves");
        assert_eq!(facelet_cube.render_net(), cubie_cube.render_net());
    }
}

#[test_log::test]
fn test_superflip_is_all_flipped() {
    let superflip: MoveSequence = "U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2"
        .parse()
        .unwrap();
    let mut cube = CubieCube::new_solved();
    cube.apply_moves(&superflip);
    let (ep, eo) = cube.edges();
    assert_eq!(ep, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    assert_eq!(eo, [1; EDGE_COUNT]);
    assert_eq!(cube.corners().1, [0; CORNER_COUNT]);

    let mut facelet_cube = FaceletCube::new_solved();
    facelet_cube.apply_moves(&superflip);
    assert_eq!(facelet_cube.facelet_colors(), cube.facelet_colors());
    for face in Face::ALL {
        assert_eq!(facelet_cube.get_color(face, 1, 1), Ok(face.color()));
        assert_ne!(facelet_cube.get_color(face, 0, 1), Ok(face.color()));
    }
}
