use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cube_model::{CubieCube, FaceletCube, Move, RubiksCube, ScrambleConfig, scramble};

fn bench_apply_move<C: RubiksCube>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group("apply_move");
    let mut cube = C::new_solved();
    for move_ in [Move::U, Move::R2, Move::FPrime] {
        group.bench_with_input(BenchmarkId::new(name, move_), &move_, |b, &move_| {
            b.iter(|| {
                cube.apply_move(black_box(move_));
            });
        });
    }
    group.finish();
}

fn bench_move_cycle<C: RubiksCube>(c: &mut Criterion, name: &str) {
    c.bench_function(&format!("{name}_all_18_moves"), |b| {
        let mut cube = C::new_solved();
        b.iter(|| {
            for move_ in Move::ALL {
                cube.apply_move(black_box(move_));
            }
        });
    });
}

fn bench_queries<C: RubiksCube>(c: &mut Criterion, name: &str) {
    let config = ScrambleConfig {
        moves: 40,
        seed: Some(12345),
        ..Default::default()
    };
    let (cube, _) = scramble::<C>(&config).expect("a 40 move scramble is within the limit");

    c.bench_function(&format!("{name}_is_solved"), |b| {
        b.iter(|| black_box(&cube).is_solved());
    });
    c.bench_function(&format!("{name}_corner_state_index"), |b| {
        b.iter(|| black_box(&cube).corner_state_index());
    });
}

fn bench_facelet_cube(c: &mut Criterion) {
    bench_apply_move::<FaceletCube>(c, "facelet");
    bench_move_cycle::<FaceletCube>(c, "facelet");
    bench_queries::<FaceletCube>(c, "facelet");
}

fn bench_cubie_cube(c: &mut Criterion) {
    bench_apply_move::<CubieCube>(c, "cubie");
    bench_move_cycle::<CubieCube>(c, "cubie");
    bench_queries::<CubieCube>(c, "cubie");
}

criterion_group!(benches, bench_facelet_cube, bench_cubie_cube);
criterion_main!(benches);
