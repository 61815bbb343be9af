use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::board::{Board, Outcome, Position, Side};
use tictactoe_engine::bot::{Difficulty, select_move};
use tictactoe_engine::session_rng::SessionRng;

fn bench_select_empty_board(c: &mut Criterion) {
    c.bench_function("select_hard_empty_board", |b| {
        let board = Board::new();
        let mut rng = SessionRng::new(1);
        b.iter(|| select_move(&board, Difficulty::Hard, &mut rng));
    });
}

fn bench_select_midgame(c: &mut Criterion) {
    c.bench_function("select_hard_midgame", |b| {
        let mut board = Board::new();
        let moves = [
            (Side::Player, 1, 1),
            (Side::Ai, 0, 0),
            (Side::Player, 2, 2),
            (Side::Ai, 0, 2),
            (Side::Player, 0, 1),
        ];
        for (side, x, y) in moves {
            board.claim(side, Position::new(x, y)).unwrap();
        }
        let mut rng = SessionRng::new(1);
        b.iter(|| select_move(&board, Difficulty::Hard, &mut rng));
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_both_sides_hard", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut rng = SessionRng::new(7);
            loop {
                // The selector plays the AI side; the player side takes
                // the first empty cell.
                let Some(player_pos) = board.empty_positions().first().copied() else {
                    break;
                };
                board.claim(Side::Player, player_pos).unwrap();
                if board.evaluate(Side::Player) != Outcome::Undecided {
                    break;
                }
                let Some(ai_pos) = select_move(&board, Difficulty::Hard, &mut rng) else {
                    break;
                };
                board.claim(Side::Ai, ai_pos).unwrap();
                if board.evaluate(Side::Ai) != Outcome::Undecided {
                    break;
                }
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_select_empty_board,
    bench_select_midgame,
    bench_full_game
);
criterion_main!(benches);
