//! AI move selection for the computer-controlled side.
//!
//! `AiPlayer` owns one engine per difficulty and guards the result: a missing
//! or out-of-set engine answer falls back to a uniformly random legal move.
//! Only a position with no legal moves at all is reported as an error, and
//! callers treat that as a finished game rather than a failure.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Difficulty, Engine, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Color};
use crate::game_state::position::Position;
use crate::game_state::position_index::PositionIndex;

pub struct AiPlayer {
    difficulty: Difficulty,
    /// Indexed by `Difficulty::index`.
    engines: [Box<dyn Engine>; 3],
    fallback_rng: StdRng,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            engines: [
                Box::new(RandomEngine::new()),
                Box::new(GreedyEngine::new()),
                Box::new(MinimaxEngine::new()),
            ],
            fallback_rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible player: every random choice derives from `seed`.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            engines: [
                Box::new(RandomEngine::with_seed(seed)),
                Box::new(GreedyEngine::new()),
                Box::new(MinimaxEngine::new()),
            ],
            fallback_rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    /// Seeded player whose `difficulty` slot is backed by `engine`.
    #[cfg(test)]
    pub(crate) fn with_engine(
        difficulty: Difficulty,
        engine: Box<dyn Engine>,
        seed: u64,
    ) -> Self {
        let mut player = Self::with_seed(difficulty, seed);
        player.engines[difficulty.index()] = engine;
        player
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    fn engine(&mut self) -> &mut dyn Engine {
        self.engines[self.difficulty.index()].as_mut()
    }

    /// Picks a move for the side to move in `position`.
    pub fn select_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> ChessResult<ChessMove> {
        let legal: Vec<ChessMove> = position
            .legal_moves()
            .iter()
            .map(|generated| generated.chess_move)
            .collect();
        if legal.is_empty() {
            return Err(ChessError::NoLegalMoves(position.side_to_move));
        }

        let difficulty = self.difficulty;
        let engine = self.engine();
        let engine_name = engine.name().to_owned();
        let output = engine.choose_move(position, params)?;
        for line in &output.info_lines {
            debug!(engine = %engine_name, "{line}");
        }

        match output.best_move {
            Some(mv) if legal.contains(&mv) => {
                debug!(%difficulty, mv = %mv, "ai move selected");
                Ok(mv)
            }
            other => {
                warn!(
                    %difficulty,
                    engine_move = ?other,
                    "engine produced no usable move, falling back to a random legal move"
                );
                legal
                    .choose(&mut self.fallback_rng)
                    .copied()
                    .ok_or_else(|| {
                        ChessError::AiSelectionFailure(format!(
                            "{engine_name} engine found no move among {} legal moves",
                            legal.len()
                        ))
                    })
            }
        }
    }
}

/// Selects Black's reply on `board`, described by `positions`.
pub fn select_ai_move(
    board: &Board,
    positions: &PositionIndex,
    difficulty: Difficulty,
    params: &SearchParams,
) -> ChessResult<ChessMove> {
    let position = Position::from_parts(*board, positions.clone(), Color::Black);
    AiPlayer::new(difficulty).select_move(&position, params)
}
