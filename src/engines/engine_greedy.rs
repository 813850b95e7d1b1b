//! Medium difficulty: one-ply static scoring.
//!
//! Each candidate scores `10 × captured value` plus a centralisation bonus of
//! `4 − Manhattan distance` from the board centre (3.5, 3.5). The first
//! maximal candidate in generator order wins.

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::GeneratedMove;

const CAPTURE_WEIGHT: f64 = 10.0;
const BOARD_CENTER: f64 = 3.5;
const CENTER_BONUS_BASE: f64 = 4.0;

#[derive(Debug, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn centralization_bonus(square: Square) -> f64 {
        let distance = (f64::from(square.row) - BOARD_CENTER).abs()
            + (f64::from(square.col) - BOARD_CENTER).abs();
        CENTER_BONUS_BASE - distance
    }

    pub fn score_move(generated: &GeneratedMove) -> f64 {
        let capture = generated
            .captured
            .map_or(0, |piece| piece.kind.value());
        CAPTURE_WEIGHT * f64::from(capture) + Self::centralization_bonus(generated.chess_move.to)
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = position.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("greedy_engine legal_moves {}", legal_moves.len()));

        let mut best: Option<(&GeneratedMove, f64)> = None;
        for generated in &legal_moves {
            let score = Self::score_move(generated);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((generated, score));
            }
        }

        if let Some((generated, score)) = best {
            out.info_lines
                .push(format!("greedy_engine best_score {score:.1}"));
            out.best_move = Some(generated.chess_move);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::game_state::chess_types::{ChessMove, Square};
    use crate::game_state::position::Position;
    use crate::utils::fen::parse_fen;

    fn choose(fen: &str) -> Option<ChessMove> {
        let (board, side) = parse_fen(fen).expect("FEN should parse");
        GreedyEngine::new()
            .choose_move(&Position::new(board, side), &SearchParams::default())
            .expect("greedy engine should not fail")
            .best_move
    }

    #[test]
    fn centre_squares_score_highest() {
        assert_eq!(GreedyEngine::centralization_bonus(Square::new(3, 3)), 3.0);
        assert_eq!(GreedyEngine::centralization_bonus(Square::new(4, 4)), 3.0);
        assert_eq!(GreedyEngine::centralization_bonus(Square::new(0, 0)), -3.0);
    }

    #[test]
    fn prefers_the_most_valuable_capture() {
        // Knight on d5 can take a rook on c7 or a pawn on e3.
        let mv = choose("k7/2R5/8/3n4/8/4P3/8/7K b");
        assert_eq!(mv, Some(ChessMove::from_coords(3, 3, 1, 2)));
    }

    #[test]
    fn quiet_positions_centralise() {
        // A lone knight on a4 heads for c5, the most central square it reaches.
        let mv = choose("7k/8/8/8/n7/8/8/K7 b");
        assert_eq!(mv, Some(ChessMove::from_coords(4, 0, 3, 2)));
    }
}
