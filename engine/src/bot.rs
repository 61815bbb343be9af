use crate::board::{Board, Outcome, Position, Side};
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub fn from_level(level: u32) -> Difficulty {
        if level == 0 {
            Difficulty::Easy
        } else {
            Difficulty::Hard
        }
    }
}

/// Picks the AI's next move, or `None` when the board is full.
///
/// Priority order: immediate win, immediate block, threat creation
/// (Hard only), random fallback. Each step scans empty cells in
/// row-major order and stops at the first qualifying cell. Probes run
/// on a scratch copy, so the caller's board is never touched.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<Position> {
    let moves = board.empty_positions();
    if moves.is_empty() {
        return None;
    }

    let mut scratch = board.clone();

    if let Some(pos) = find_winning_move(&mut scratch, Side::Ai, &moves) {
        return Some(pos);
    }

    // Blocking applies at every difficulty.
    if let Some(pos) = find_winning_move(&mut scratch, Side::Player, &moves) {
        return Some(pos);
    }

    if difficulty == Difficulty::Hard
        && let Some(pos) = find_threat_move(&mut scratch, &moves)
    {
        return Some(pos);
    }

    rng.choose(&moves).copied()
}

fn find_winning_move(board: &mut Board, side: Side, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        // The threat search calls this with one candidate already placed.
        if !board.is_empty(pos) {
            continue;
        }
        board.place(side, pos);
        let won = board.evaluate(side) == Outcome::win_for(side);
        board.release(pos);
        if won {
            return Some(pos);
        }
    }
    None
}

// A move that sets up an immediate win on the following turn.
fn find_threat_move(board: &mut Board, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.place(Side::Ai, pos);
        let creates_threat = find_winning_move(board, Side::Ai, moves).is_some();
        board.release(pos);
        if creates_threat {
            return Some(pos);
        }
    }
    None
}
