use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pacsearch::agents::{CompositeHeuristic, Evaluator, SearchAgent, ScoreHeuristic};
use pacsearch::env::Direction;
use pacsearch::game::{layouts, Game};
use pacsearch::search::{self, State, Strategy};

fn game_successor(c: &mut Criterion) {
    let game = Game::parse(layouts::SMALL_CLASSIC).unwrap();

    c.bench_function("game_successor", |b| {
        b.iter(|| {
            use Direction::*;
            let game = black_box(&game).successor(0, West);
            let game = game.successor(1, East);
            let game = game.successor(2, West);
            game.successor(0, East)
        })
    });
}

fn tree_search(c: &mut Criterion) {
    let game = Game::parse(layouts::MINIMAX_CLASSIC).unwrap();

    let mut group = c.benchmark_group("minimax_classic");
    group.sample_size(20);
    group.bench_function("minimax", |b| {
        b.iter(|| search::minimax(black_box(&game), 3, &ScoreHeuristic))
    });
    group.bench_function("alphabeta", |b| {
        b.iter(|| search::alphabeta(black_box(&game), 3, &ScoreHeuristic))
    });
    group.bench_function("expectimax", |b| {
        b.iter(|| search::expectimax(black_box(&game), 3, &ScoreHeuristic))
    });
    group.finish();
}

fn search_agent(c: &mut Criterion) {
    let game = Game::parse(layouts::SMALL_CLASSIC).unwrap();
    let agent = SearchAgent::new(
        Strategy::AlphaBeta,
        2,
        Evaluator::Composite(CompositeHeuristic::default()),
    );

    c.bench_function("small_classic_alphabeta_composite", |b| {
        b.iter(|| agent.search(black_box(&game)))
    });
}

criterion_group!(benches, game_successor, tree_search, search_agent);
criterion_main!(benches);
