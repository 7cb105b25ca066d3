use criterion::{criterion_group, criterion_main, Criterion};
use riverforge_core::config::ScoreWeights;
use riverforge_core::grid::GridMask;
use riverforge_core::layout::derive;
use riverforge_core::moves;
use riverforge_core::scoring::score_layout;
use riverforge_core::state::SearchState;
use std::hint::black_box;

fn setup_state(mask: &GridMask) -> SearchState {
    let mut rng = fastrand::Rng::with_seed(42);
    let start = mask.choose_start(&mut rng).expect("open mask has a border");
    let snake = moves::regrow(mask, &[start], 0, &mut rng);
    let mut state = SearchState::new(snake, mask.height(), mask.width());
    for _ in 0..15 {
        state = moves::dessert_toggle(mask, &state, &mut rng);
    }
    for _ in 0..10 {
        state = moves::suburb_grow(mask, &state, &mut rng);
    }
    state
}

fn bench_derive(c: &mut Criterion) {
    let mask = GridMask::open(12, 21);
    let state = setup_state(&mask);
    c.bench_function("derive_12x21", |b| {
        b.iter(|| derive(black_box(&mask), black_box(&state)))
    });
}

fn bench_score(c: &mut Criterion) {
    let mask = GridMask::open(12, 21);
    let state = setup_state(&mask);
    let layout = derive(&mask, &state);
    let weights = ScoreWeights::default();
    c.bench_function("score_12x21", |b| {
        b.iter(|| score_layout(black_box(&layout), black_box(&weights)))
    });
}

fn bench_regrow_move(c: &mut Criterion) {
    let mask = GridMask::open(12, 21);
    let state = setup_state(&mask);
    let mut rng = fastrand::Rng::with_seed(7);
    c.bench_function("regrow_move_12x21", |b| {
        b.iter(|| moves::regrow_move(black_box(&mask), black_box(&state), &mut rng))
    });
}

criterion_group!(benches, bench_derive, bench_score, bench_regrow_move);
criterion_main!(benches);
