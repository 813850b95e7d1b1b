//! Terminal front end.
//!
//! Squares are typed in algebraic form: `e2` selects or targets a square and
//! `e2e4` plays a move in one go. Type `help` for the remaining commands.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use random_chess::engines::engine_trait::Difficulty;
use random_chess::errors::ChessResult;
use random_chess::game_state::chess_types::{ChessMove, Color, GameMode, Square};
use random_chess::game_state::game_state::GameState;
use random_chess::session::game_session::{
    AiTurnOutcome, ClickOutcome, GameSession, Opponent, SessionConfig,
};
use random_chess::utils::algebraic::{algebraic_to_square, parse_move};
use random_chess::utils::army_summary::summarize_army;
use random_chess::utils::render_game_state::render_board;

#[derive(Debug, Parser)]
#[command(name = "random_chess", about = "Chess with randomized starting armies")]
struct Cli {
    /// standard, random-same, random-different or random-crazy
    #[arg(long, default_value = "standard")]
    mode: GameMode,

    /// ai or human
    #[arg(long, default_value = "ai")]
    opponent: Opponent,

    /// easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 500)]
    ai_delay_ms: u64,

    #[arg(long, default_value_t = 5000)]
    time_budget_ms: u64,

    /// Start from a FEN placement instead of a generated setup.
    #[arg(long)]
    fen: Option<String>,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: self.mode,
            opponent: self.opponent,
            difficulty: self.difficulty,
            ai_delay: Duration::from_millis(self.ai_delay_ms),
            time_budget: Duration::from_millis(self.time_budget_ms),
            seed: self.seed,
        }
    }
}

const HELP: &str = "\
commands:
  e2            select a piece or move the selected piece there
  e2e4          play a move
  new           start a new game
  mode <m>      standard | random-same | random-different | random-crazy
  opponent <o>  ai | human
  difficulty <d> easy | medium | hard
  armies        show both starting armies
  history       list moves played
  fen           print the current position
  quit";

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config();
    let mut session = match &cli.fen {
        Some(fen) => GameSession::from_game(config, GameState::from_fen(fen)?),
        None => GameSession::new(config)?,
    };

    print_armies(session.game());
    print_board(&session);
    drive_ai(&mut session);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            prompt();
            continue;
        };
        let argument = words.next();

        match (command.to_ascii_lowercase().as_str(), argument) {
            ("quit" | "exit", _) => break,
            ("help", _) => println!("{HELP}"),
            ("new", _) => restart(&mut session, |s| s.reset()),
            ("mode", Some(value)) => match value.parse::<GameMode>() {
                Ok(mode) => restart(&mut session, |s| s.set_mode(mode)),
                Err(err) => println!("{err}"),
            },
            ("opponent", Some(value)) => match value.parse::<Opponent>() {
                Ok(opponent) => restart(&mut session, |s| s.set_opponent(opponent)),
                Err(err) => println!("{err}"),
            },
            ("difficulty", Some(value)) => match value.parse::<Difficulty>() {
                Ok(difficulty) => {
                    session.set_difficulty(difficulty);
                    println!("difficulty set to {}", difficulty.label());
                }
                Err(err) => println!("{err}"),
            },
            ("armies", _) => print_armies(session.game()),
            ("history", _) => {
                for (i, entry) in session.game().history.iter().enumerate() {
                    println!(
                        "{:>3}. [{}] {} {}",
                        i + 1,
                        entry.played_at.format("%H:%M:%S"),
                        entry.piece.color,
                        entry
                    );
                }
            }
            ("fen", _) => println!("{}", session.game().get_fen()),
            _ => {
                handle_input(&mut session, &line);
                print_board(&session);
                drive_ai(&mut session);
            }
        }
        prompt();
    }
    Ok(())
}

fn handle_input(session: &mut GameSession, text: &str) {
    if let Ok(square) = algebraic_to_square(text) {
        report_click(square, session.click(square));
        return;
    }
    match parse_move(text) {
        Ok(mv) => play_typed_move(session, mv),
        Err(_) => println!("unrecognised input '{}', type 'help'", text.trim()),
    }
}

fn play_typed_move(session: &mut GameSession, mv: ChessMove) {
    if session.selected() != Some(mv.from) {
        match session.click(mv.from) {
            ClickOutcome::Selected(_) => {}
            other => {
                report_click(mv.from, other);
                return;
            }
        }
    }
    report_click(mv.to, session.click(mv.to));
}

fn report_click(square: Square, outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Ignored => println!("not your turn"),
        ClickOutcome::Rejected => println!("{square} is not a legal choice"),
        ClickOutcome::Selected(_) | ClickOutcome::Deselected | ClickOutcome::Moved(_) => {}
    }
}

fn drive_ai(session: &mut GameSession) {
    if !session.begin_ai_turn() {
        return;
    }
    println!("{}", session.status_message());
    thread::sleep(session.config().ai_delay);

    match session.play_ai_turn() {
        AiTurnOutcome::Moved(mv) => println!("AI plays {mv}"),
        AiTurnOutcome::Finished | AiTurnOutcome::Failed | AiTurnOutcome::NotAiTurn => {}
    }
    print_board(session);
}

fn restart(session: &mut GameSession, action: impl FnOnce(&mut GameSession) -> ChessResult<()>) {
    match action(session) {
        Ok(()) => {
            print_armies(session.game());
            print_board(session);
            drive_ai(session);
        }
        Err(err) => println!("{err}. Please start a new game."),
    }
}

fn print_armies(game: &GameState) {
    println!("mode: {}", game.mode.label());
    for color in [Color::White, Color::Black] {
        println!("{color} army: {}", summarize_army(game.army(color)));
    }
}

fn print_board(session: &GameSession) {
    println!();
    println!("{}", render_board(session.game().board(), &session.highlighted_moves()));
    println!("{}", session.status_message());
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
