use clap::Parser;
use std::io::{self, BufRead, Write};
use tictactoe_engine::board::{Board, Position, Side};
use tictactoe_engine::{GameSession, Outcome, SessionSettings, logger};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML settings file
    #[arg(long, default_value = "tictactoe_config.yaml")]
    config: String,

    /// Difficulty level override: 0 = easy, 1 and up = hard
    #[arg(long)]
    difficulty: Option<u32>,

    /// RNG seed override, for reproducing a sitting
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    logger::init_logger();

    let mut settings = SessionSettings::load(&args.config)?;
    if let Some(level) = args.difficulty {
        settings.difficulty_level = level;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }

    let mut session = GameSession::new(&settings);

    println!("You are X, the computer is O. Enter moves as: x y (each 0-2).");
    render(session.board());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        if line.trim().is_empty() {
            continue;
        }
        if line.trim() == "quit" {
            break;
        }

        let (x, y) = match parse_move(&line) {
            Ok(pos) => pos,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        let report = match session.play_player_move(x, y) {
            Ok(report) => report,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        if let Some(pos) = report.ai_move {
            println!("Computer plays ({}, {})", pos.x, pos.y);
        }
        render(session.board());

        let message = match report.outcome {
            Outcome::PlayerWin => "You win!",
            Outcome::AiWin => "The computer wins.",
            Outcome::Tie => "Tie game.",
            Outcome::Undecided => continue,
        };
        println!("{}", message);

        print!("Play again? (y/n) ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        match lines.next() {
            Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => {
                session.rematch();
                render(session.board());
            }
            _ => break,
        }
    }

    Ok(())
}

fn parse_move(line: &str) -> Result<(usize, usize), String> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err("Enter two coordinates, e.g.: 1 2".to_string());
    };
    let x: usize = x
        .parse()
        .map_err(|_| format!("Not a coordinate: {}", x))?;
    let y: usize = y
        .parse()
        .map_err(|_| format!("Not a coordinate: {}", y))?;
    Ok((x, y))
}

fn render(board: &Board) {
    println!();
    for y in 0..3 {
        let row: Vec<&str> = (0..3)
            .map(|x| {
                let pos = Position::new(x, y);
                if board.is_owned_by(Side::Player, pos) {
                    "X"
                } else if board.is_owned_by(Side::Ai, pos) {
                    "O"
                } else {
                    "."
                }
            })
            .collect();
        println!(" {}", row.join(" | "));
        if y < 2 {
            println!("---+---+---");
        }
    }
    println!();
}
