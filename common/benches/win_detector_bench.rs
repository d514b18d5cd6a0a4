use common::games::tictactoe::{Board, TicTacToeGameState, evaluate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn create_boards() -> Vec<Board> {
    use common::games::tictactoe::Mark::{Empty as E, O, X};
    vec![
        Board::new(),
        Board::from_cells([X, O, E, E, X, E, O, E, E]),
        Board::from_cells([X, X, O, O, O, X, X, X, O]),
        Board::from_cells([O, X, X, X, O, E, E, X, O]),
    ]
}

fn play_with_branching() -> usize {
    let mut state = TicTacToeGameState::new();
    for cell in [0, 4, 1, 5, 8] {
        state.apply_move(cell);
    }
    state.jump_to_step(2);
    for cell in [7, 3, 2, 1] {
        state.apply_move(cell);
    }
    state.history().records().len()
}

fn criterion_benchmark(c: &mut Criterion) {
    let boards = create_boards();
    c.bench_function("evaluate_sample_boards", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(evaluate(black_box(board)));
            }
        })
    });

    c.bench_function("play_with_branching", |b| b.iter(|| black_box(play_with_branching())));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
