//! Benchmarks for the simulator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use poker_odds::cards::{parse_card_run, CardMask, Deck};
use poker_odds::sim::{SimConfig, Simulator, Spot};

fn preflop_heads_up_benchmark(c: &mut Criterion) {
    let hole = parse_card_run("As Ks").unwrap();
    let spot = Spot::new(&hole, &[], 1).unwrap();
    let mut simulator = Simulator::new(SimConfig::default().with_seed(42));

    c.bench_function("preflop_heads_up_1000_trials", |b| {
        b.iter(|| simulator.simulate_n(black_box(&spot), 1000).unwrap())
    });
}

fn flop_three_way_benchmark(c: &mut Criterion) {
    let hole = parse_card_run("Jh Th").unwrap();
    let board = parse_card_run("9h 8c 2h").unwrap();
    let spot = Spot::new(&hole, &board, 3).unwrap();
    let mut simulator = Simulator::new(SimConfig::default().with_seed(42));

    c.bench_function("flop_three_way_1000_trials", |b| {
        b.iter(|| simulator.simulate_n(black_box(&spot), 1000).unwrap())
    });
}

fn deck_draw_benchmark(c: &mut Criterion) {
    let deck = Deck::standard();
    let exclude = CardMask::from_cards(&parse_card_run("As Ks Qh").unwrap());
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("deck_draw_7", |b| {
        b.iter(|| deck.draw(black_box(exclude), 7, &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    preflop_heads_up_benchmark,
    flop_three_way_benchmark,
    deck_draw_benchmark
);
criterion_main!(benches);
