//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so the heuristic can be
//! swapped without touching the tree walk.

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;

/// Score assigned to a checkmated side, from the winner's perspective.
pub const MATE_SCORE: i32 = 30_000;

/// Flat adjustment for a king standing in check.
pub const CHECK_BONUS: i32 = 5;

pub trait BoardScorer: Send + Sync {
    /// Static score of `position` from `perspective`'s point of view.
    fn score(&self, position: &Position, perspective: Color) -> i32;
}

/// Material balance plus a flat bonus for checking the opponent and a matching
/// penalty for being in check.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialCheckScorer;

impl MaterialCheckScorer {
    #[inline]
    pub fn material_balance(position: &Position, perspective: Color) -> i32 {
        position.board.material(perspective) - position.board.material(perspective.opposite())
    }
}

impl BoardScorer for MaterialCheckScorer {
    fn score(&self, position: &Position, perspective: Color) -> i32 {
        let mut score = Self::material_balance(position, perspective);
        let opponent = perspective.opposite();
        if is_king_in_check(&position.board, opponent, &position.index) {
            score += CHECK_BONUS;
        }
        if is_king_in_check(&position.board, perspective, &position.index) {
            score -= CHECK_BONUS;
        }
        score
    }
}
