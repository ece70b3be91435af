//! Benchmarks for the search strategies and the minimax engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use search_games::games::coin_line::{CoinLine, Turn};
use search_games::games::jugs::NJugsProblem;
use search_games::minimax::MinimaxSolver;
use search_games::search::{Algorithm, SearchConfig};

fn jugs_strategies_benchmark(c: &mut Criterion) {
    let problem = NJugsProblem::new(&[3, 5, 8], &[0, 4, 4]).unwrap();
    let config = SearchConfig::default();

    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("jugs_3_5_8_{}", algorithm.key()), |b| {
            b.iter(|| black_box(algorithm.run(&problem, &config).unwrap()))
        });
    }
}

fn coin_line_minimax_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let game = CoinLine::random(20, 15, &mut rng).unwrap();
    let state = game.initial_state(Turn::Ai);

    c.bench_function("coin_line_20_cold_table", |b| {
        b.iter(|| {
            let mut solver = MinimaxSolver::new(game.clone());
            black_box(solver.best_move(&state).unwrap())
        })
    });
}

criterion_group!(benches, jugs_strategies_benchmark, coin_line_minimax_benchmark);
criterion_main!(benches);
