use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockdrop::core::{Board, GameSnapshot, GameState, SimpleRng};
use blockdrop::term::{FrameBuffer, GameView, Phase, Viewport};
use blockdrop::types::{ColorIndex, COLUMNS};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut state = GameState::with_rng(SimpleRng::new(12345));

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state = GameState::with_rng(SimpleRng::new(12345));
            }
            black_box(state.gravity_tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = ColorIndex::new(1).unwrap();
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..COLUMNS as i8 {
                    board.set(row, col, Some(color));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::with_rng(SimpleRng::new(12345));

    c.bench_function("spawn_piece", |b| {
        b.iter(|| black_box(state.spawn_piece()))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::with_rng(SimpleRng::new(12345));

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(1, 0);
            state.try_move(-1, 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::with_rng(SimpleRng::new(12345));
    for _ in 0..4 {
        state.soft_drop();
    }

    c.bench_function("rotate", |b| {
        b.iter(|| black_box(state.rotate()))
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = GameState::with_rng(SimpleRng::new(12345));
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_render_80x24", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Phase::Playing, Viewport::new(80, 24), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_rotate,
    bench_snapshot_and_render
);
criterion_main!(benches);
