//! Standalone AI-vs-AI series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --player1 hard --player2 medium`
//! `RUST_LOG=info cargo run --release --bin engine_match_series -- --mode random-different`

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use random_chess::engines::engine_trait::{Difficulty, SearchParams};
use random_chess::errors::ChessResult;
use random_chess::game_state::chess_types::GameMode;
use random_chess::utils::engine_match_harness::{
    engine_for_difficulty, play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Parser)]
#[command(name = "engine_match_series", about = "Play one AI difficulty against another")]
struct Cli {
    #[arg(long, default_value = "hard")]
    player1: Difficulty,

    #[arg(long, default_value = "medium")]
    player2: Difficulty,

    #[arg(long, default_value = "standard")]
    mode: GameMode,

    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 5000)]
    time_budget_ms: u64,
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = MatchSeriesConfig {
        games: cli.games,
        base_seed: cli.seed,
        per_game: MatchConfig {
            max_plies: cli.max_plies,
            mode: cli.mode,
            params: SearchParams {
                time_budget: Duration::from_millis(cli.time_budget_ms),
            },
        },
    };

    let stats = play_engine_match_series(
        |seed| engine_for_difficulty(cli.player1, seed),
        |seed| engine_for_difficulty(cli.player2, seed.wrapping_add(1)),
        &config,
    )?;

    println!("player1={} player2={} mode={}", cli.player1, cli.player2, cli.mode);
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
