//! Throughput of full battles and of single-state clones.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use circle_battle::{BattleEngine, Combatant, GameRng};

fn roster(prefix: &str) -> Vec<Combatant> {
    (0..5)
        .map(|i| Combatant::new(format!("{prefix}{i}"), format!("{prefix} {i}"), 600 + 40 * i, 120 + 10 * i))
        .collect()
}

fn full_battle(c: &mut Criterion) {
    let engine = BattleEngine::default();
    let mine = roster("m");
    let theirs = roster("o");

    c.bench_function("full_battle", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = GameRng::new(seed);
            let mut state = engine.initialize("Home", mine.clone(), "Away", theirs.clone(), &mut rng);
            while state.winner.is_none() {
                state = engine.attack(&state, &mut rng).into_state();
            }
            black_box(state)
        });
    });
}

fn state_clone(c: &mut Criterion) {
    let engine = BattleEngine::default();
    let mut rng = GameRng::new(1);
    let mut state = engine.initialize("Home", roster("m"), "Away", roster("o"), &mut rng);
    for _ in 0..10 {
        state = engine.attack(&state, &mut rng).into_state();
    }

    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
}

criterion_group!(benches, full_battle, state_clone);
criterion_main!(benches);
