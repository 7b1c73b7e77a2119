use criterion::{black_box, criterion_group, criterion_main, Criterion};
use concentration::core::{GameState, ThemeProvider};

fn bench_flip_card(c: &mut Criterion) {
    let mut state = GameState::new(8, 12345).unwrap();

    c.bench_function("flip_card", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let _ = state.flip_card(black_box(i % 16));
            i += 1;
            if state.is_complete() {
                state.reset_game();
            }
        })
    });
}

fn bench_reset_game(c: &mut Criterion) {
    let mut state = GameState::new(8, 12345).unwrap();

    c.bench_function("reset_game", |b| {
        b.iter(|| {
            state.reset_game();
        })
    });
}

fn bench_pick_random(c: &mut Criterion) {
    let mut provider = ThemeProvider::new(12345);

    c.bench_function("pick_random", |b| {
        b.iter(|| black_box(provider.pick_random()))
    });
}

criterion_group!(benches, bench_flip_card, bench_reset_game, bench_pick_random);
criterion_main!(benches);
