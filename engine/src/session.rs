use crate::board::{Board, Outcome, Position, Side};
use crate::bot::{Difficulty, select_move};
use crate::config::SessionSettings;
use crate::session_rng::SessionRng;

/// Result of one full turn cycle: the player's move plus, when the game
/// continued, the AI's reply. `ai_move` is `None` when the game ended on
/// the player's move. `outcome` is the evaluation after the last move
/// applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: Outcome,
    pub ai_move: Option<Position>,
}

pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    rng: SessionRng,
    game_over: bool,
}

impl GameSession {
    pub fn new(settings: &SessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_entropy(),
        };
        let difficulty = Difficulty::from_level(settings.difficulty_level);
        crate::log!(
            "Starting session: difficulty {:?}, seed {}",
            difficulty,
            rng.seed()
        );
        Self {
            board: Board::new(),
            difficulty,
            rng,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Applies the player's move, and the AI's reply when the game
    /// continues. Invalid moves (occupied cell, out of range, game
    /// already over) leave the session untouched.
    pub fn play_player_move(&mut self, x: usize, y: usize) -> Result<TurnReport, String> {
        if self.game_over {
            return Err("Game is already over".to_string());
        }

        self.board.claim(Side::Player, Position::new(x, y))?;

        let outcome = self.board.evaluate(Side::Player);
        if outcome != Outcome::Undecided {
            self.game_over = true;
            return Ok(TurnReport {
                outcome,
                ai_move: None,
            });
        }

        let Some(pos) = select_move(&self.board, self.difficulty, &mut self.rng) else {
            // Unreachable in practice: a full board evaluates to Tie above.
            self.game_over = true;
            return Ok(TurnReport {
                outcome: Outcome::Tie,
                ai_move: None,
            });
        };

        self.board.claim(Side::Ai, pos)?;
        crate::log!("AI plays ({}, {})", pos.x, pos.y);

        let outcome = self.board.evaluate(Side::Ai);
        if outcome != Outcome::Undecided {
            self.game_over = true;
        }

        Ok(TurnReport {
            outcome,
            ai_move: Some(pos),
        })
    }

    /// Resets the board for another game. Difficulty is kept and the RNG
    /// stream continues, so one seed reproduces a whole sitting.
    pub fn rematch(&mut self) {
        self.board.reset();
        self.game_over = false;
        crate::log!("Board cleared for rematch");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(difficulty_level: u32, seed: u64) -> SessionSettings {
        SessionSettings {
            difficulty_level,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_center_opening_gets_a_reply() {
        let mut session = GameSession::new(&settings(0, 7));
        let report = session.play_player_move(1, 1).unwrap();

        let ai_move = report.ai_move.expect("AI must reply on a non-final move");
        assert!(session.board().is_owned_by(Side::Ai, ai_move));
        assert_eq!(report.outcome, Outcome::Undecided);
        assert_eq!(session.board().empty_count(), 7);
        assert!(!session.is_over());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut session = GameSession::new(&settings(1, 7));
        session.play_player_move(1, 1).unwrap();
        let result = session.play_player_move(1, 1);
        assert!(result.is_err());
        assert_eq!(session.board().empty_count(), 7);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut session = GameSession::new(&settings(1, 7));
        assert!(session.play_player_move(3, 0).is_err());
        assert_eq!(session.board().empty_count(), 9);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut session = GameSession::new(&settings(1, 42));
        // Always take the first empty cell; the game must end within
        // five turn cycles regardless of what the AI picks.
        for _ in 0..5 {
            if session.is_over() {
                break;
            }
            let pos = session.board().empty_positions()[0];
            let report = session.play_player_move(pos.x, pos.y).unwrap();
            if report.outcome != Outcome::Undecided {
                break;
            }
        }
        assert!(session.is_over());
        assert!(session.play_player_move(0, 0).is_err());
    }

    #[test]
    fn test_rematch_restores_fresh_board() {
        let mut session = GameSession::new(&settings(1, 9));
        let seed = session.seed();
        session.play_player_move(0, 0).unwrap();
        session.rematch();

        assert!(!session.is_over());
        assert_eq!(session.board().empty_count(), 9);
        assert_eq!(session.board().empty_positions().len(), 9);
        assert_eq!(session.seed(), seed);
    }

    #[test]
    fn test_explicit_seed_is_reported() {
        let session = GameSession::new(&settings(0, 1234));
        assert_eq!(session.seed(), 1234);
    }

    #[test]
    fn test_difficulty_tiers_from_settings() {
        assert_eq!(
            GameSession::new(&settings(0, 1)).difficulty(),
            Difficulty::Easy
        );
        assert_eq!(
            GameSession::new(&settings(3, 1)).difficulty(),
            Difficulty::Hard
        );
    }
}
