//! Benchmarks for session setup and a movement turn.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use cluedo::{Direction, GameWorld, SetupConfig, TurnPhase};

fn bench_setup(c: &mut Criterion) {
    let config = SetupConfig::new(42, ["Casey", "Linus", "Ada", "Grace"]);

    c.bench_function("setup_4p", |b| {
        b.iter(|| {
            let world = GameWorld::setup(black_box(&config));
            black_box(world)
        });
    });
}

fn bench_movement_turn(c: &mut Criterion) {
    let config = SetupConfig::new(42, ["Casey", "Linus", "Ada", "Grace", "Alan", "Barbara"]);

    c.bench_function("movement_turn_6p", |b| {
        b.iter(|| {
            let mut world = GameWorld::setup(&config).unwrap();
            let seat = world.advance_turn().unwrap();
            let mut steps = world.begin_turn(seat, 12).unwrap();
            while world.participant(seat).map(|p| p.phase()) == Some(TurnPhase::Moving) {
                let next = Direction::cardinal()
                    .into_iter()
                    .find(|&direction| steps.get(direction).is_some());
                match next {
                    Some(direction) => {
                        steps = world.move_player(seat, direction).unwrap().legal_next_steps
                    }
                    None => break,
                }
            }
            black_box(world.snapshot())
        });
    });
}

criterion_group!(benches, bench_setup, bench_movement_turn);
criterion_main!(benches);
