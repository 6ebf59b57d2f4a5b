use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fruitris::core::{resolve, Board, GameState};
use fruitris::types::{ClearPolicy, Fruit, GameAction, DROP_INTERVAL_MS};

fn streaky_board() -> Board {
    let mut board = Board::new();
    for row in 0..4 {
        for col in 0..10 {
            let fruit = Fruit::ALL[((col + row) % 2) as usize];
            board.set(col, row, Some(fruit));
        }
    }
    for row in 4..10 {
        board.set(2, row, Some(Fruit::ALL[(row / 3) as usize]));
    }
    board
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_interval", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.tick(black_box(DROP_INTERVAL_MS));
        })
    });
}

fn bench_resolve_single(c: &mut Criterion) {
    let template = streaky_board();

    c.bench_function("resolve_single", |b| {
        b.iter(|| {
            let mut board = template.clone();
            resolve(&mut board, black_box(ClearPolicy::Single))
        })
    });
}

fn bench_resolve_cascade(c: &mut Criterion) {
    let template = streaky_board();

    c.bench_function("resolve_cascade", |b| {
        b.iter(|| {
            let mut board = template.clone();
            resolve(&mut board, black_box(ClearPolicy::Cascade))
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::MoveLeft));
            state.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.apply_action(GameAction::MoveDown);
    state.apply_action(GameAction::MoveDown);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Rotate));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_resolve_single,
    bench_resolve_cascade,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
