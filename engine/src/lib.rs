pub mod board;
pub mod bot;
pub mod config;
pub mod logger;
pub mod session;
pub mod session_rng;

pub use board::{Board, Cell, Outcome, Position, Side};
pub use bot::{Difficulty, select_move};
pub use config::{SessionSettings, Validate};
pub use session::{GameSession, TurnReport};
pub use session_rng::SessionRng;
