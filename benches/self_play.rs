use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_chess::{BoardConfig, Color, ComputerAgent, GameConfig, TurnEngine};

fn play(config: &GameConfig, seed: u64) -> usize {
    let mut engine = TurnEngine::new(config.clone(), seed).unwrap();
    engine
        .play_out(&mut ComputerAgent::new(), &mut ComputerAgent::new())
        .unwrap();
    engine.state().history().len()
}

fn bench_self_play(c: &mut Criterion) {
    let reference = GameConfig::default();
    c.bench_function("self_play_6x6", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(play(&reference, seed))
        })
    });

    let large = GameConfig::new(BoardConfig::new(12, &Color::PALETTE, 24));
    c.bench_function("self_play_12x12", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(play(&large, seed))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = TurnEngine::new(GameConfig::default(), 1).unwrap();
    c.bench_function("snapshot_6x6", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, bench_self_play, bench_snapshot);
criterion_main!(benches);
