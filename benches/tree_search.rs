use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_scopone::games::scopone::ScoponeBuilder;
use rust_scopone::greedy::{GreedyPolicy, OpponentPolicy};
use rust_scopone::mcts::{SearchAgent, SearchConfig};

fn tree_search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_search");
    for (seed, budget) in [(1u64, 100u32), (2, 500), (3, 1000)] {
        let (game, state) = ScoponeBuilder::new().deal(seed).build().expect("valid deal");
        group.bench_function(format!("opening_{seed}_{budget}"), |b| {
            b.iter(|| {
                let mut agent =
                    SearchAgent::new(game.engine().clone(), SearchConfig::default().with_budget(budget));
                black_box(agent.tree_search(&state).expect("opening is not terminal"))
            })
        });
    }
    group.finish();
}

fn greedy_bench(c: &mut Criterion) {
    let (game, state) = ScoponeBuilder::new().deal(9).build().expect("valid deal");
    c.bench_function("greedy_choose_opening", |b| {
        b.iter(|| black_box(GreedyPolicy.choose_move(&state, game.engine().values())))
    });
}

fn legal_moves_bench(c: &mut Criterion) {
    let (game, state) = ScoponeBuilder::new().deal(5).build().expect("valid deal");
    let engine = game.engine();
    // Play a few greedy moves so the table has something to combine.
    let mut state = state;
    for _ in 0..6 {
        let Some(mv) = GreedyPolicy.choose_move(&state, engine.values()) else { break };
        state = engine.apply_move(&state, &mv).expect("greedy moves are legal");
    }
    c.bench_function("legal_moves_midhand", |b| b.iter(|| black_box(engine.legal_moves(&state))));
}

criterion_group!(benches, tree_search_bench, greedy_bench, legal_moves_bench);
criterion_main!(benches);
