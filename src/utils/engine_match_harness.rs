//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on seeded setups of
//! any game mode. Engines play whichever side they are handed, so any
//! difficulty can take White here even though the interactive session only
//! lets the AI play Black.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Difficulty, Engine, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameMode};
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub mode: GameMode,
    pub params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            mode: GameMode::Standard,
            params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_move_time_ms(&self) -> f64 {
        avg_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        avg_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms(),
        )
    }
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Engine backing a difficulty level, seeded where it draws randomness.
pub fn engine_for_difficulty(difficulty: Difficulty, seed: u64) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomEngine::with_seed(seed)),
        Difficulty::Medium => Box::new(GreedyEngine::new()),
        Difficulty::Hard => Box::new(MinimaxEngine::new()),
    }
}

/// Play one match on a setup generated from `seed`.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = GameState::new_game(config.mode, &mut rng)?;
    play_engine_match_from_state(engine_white, engine_black, start, config)
}

/// Play one match from a caller-provided state.
pub fn play_engine_match_from_state(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    mut state: GameState,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        match state.status.status {
            GameStatus::Checkmate => {
                outcome = match state.side_to_move() {
                    Color::White => MatchOutcome::BlackWinCheckmate,
                    Color::Black => MatchOutcome::WhiteWinCheckmate,
                };
                break;
            }
            GameStatus::Stalemate => {
                outcome = MatchOutcome::DrawStalemate;
                break;
            }
            GameStatus::Error => {
                return Err(ChessError::AiSelectionFailure(state.status.message.clone()));
            }
            GameStatus::Active | GameStatus::Check => {}
        }

        let mover = state.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let out = engine.choose_move(&state.position, &config.params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or_else(|| {
            ChessError::AiSelectionFailure(format!("{} returned no move", engine.name()))
        })?;
        played_moves.push(chosen.to_string());
        state = state.play_move(chosen)?;
    }

    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed);

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner = |color: Color| {
            let player = if (color == Color::White) == player1_is_white {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            };
            SeriesOutcome::PlayerWinCheckmate { player, color }
        };
        let mapped = match result.outcome {
            MatchOutcome::WhiteWinCheckmate => winner(Color::White),
            MatchOutcome::BlackWinCheckmate => winner(Color::Black),
            MatchOutcome::DrawStalemate => SeriesOutcome::DrawStalemate,
            MatchOutcome::DrawMaxPlies => SeriesOutcome::DrawMaxPlies,
        };
        match mapped {
            SeriesOutcome::PlayerWinCheckmate {
                player: PlayerId::Player1,
                ..
            } => stats.player1_wins += 1,
            SeriesOutcome::PlayerWinCheckmate {
                player: PlayerId::Player2,
                ..
            } => stats.player2_wins += 1,
            SeriesOutcome::DrawStalemate | SeriesOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            games = config.games,
            seed,
            player1_is_white,
            outcome = ?mapped,
            plies = result.played_moves.len(),
            "series game finished"
        );
    }

    Ok(stats)
}
