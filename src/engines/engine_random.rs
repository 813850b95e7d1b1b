//! Easy difficulty: a uniformly random legal move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::ChessResult;
use crate::game_state::position::Position;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = position.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        out.best_move = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .map(|generated| generated.chess_move);
        Ok(out)
    }
}
