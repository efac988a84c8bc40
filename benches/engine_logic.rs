use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tint::core::{Bag, Board, Engine, EngineSnapshot, SimpleRng, TintScoring};
use tint::types::{Action, Cell, Evaluation, ShapeColor, PLAYABLE_COLS};

fn bench_evaluate(c: &mut Criterion) {
    let mut engine = Engine::new(12345, TintScoring::default());

    c.bench_function("evaluate_tick", |b| {
        b.iter(|| {
            if engine.evaluate() == Evaluation::GameOver {
                engine.init();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 17..=20 {
                for x in 1..=PLAYABLE_COLS as i8 {
                    board.set(x, y, Cell::Block(ShapeColor::Red));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_bag(c: &mut Criterion) {
    let mut bag = Bag::new(SimpleRng::new(12345));

    c.bench_function("bag_next", |b| {
        b.iter(|| {
            black_box(bag.next());
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut engine = Engine::new(12345, TintScoring::default());
    engine.set_shadow(true);

    c.bench_function("shift_with_shadow", |b| {
        b.iter(|| {
            engine.apply_action(black_box(Action::Left));
            engine.apply_action(black_box(Action::Right));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = Engine::new(12345, TintScoring::default());

    c.bench_function("rotate", |b| {
        b.iter(|| {
            engine.apply_action(black_box(Action::RotateClockwise));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = Engine::new(12345, TintScoring::default());
    let mut snap = EngineSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_line_clear,
    bench_bag,
    bench_shift,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
