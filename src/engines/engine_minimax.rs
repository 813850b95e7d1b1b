//! Hard difficulty: two-ply alpha-beta.
//!
//! Every root candidate is played and the opponent's replies are searched with
//! `minimax`. The best root score so far is passed down as alpha, so replies
//! that cannot beat it are cut early. The time budget is polled between root
//! candidates; when it runs out the best move found so far is returned.

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::engines::time_management::TimeBudget;
use crate::errors::ChessResult;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, MaterialCheckScorer};
use crate::search::minimax::{minimax, SearchStats};

/// Plies searched below each root candidate.
pub const REPLY_DEPTH: u8 = 1;

pub struct MinimaxEngine<S: BoardScorer = MaterialCheckScorer> {
    scorer: S,
    reply_depth: u8,
}

impl MinimaxEngine<MaterialCheckScorer> {
    pub fn new() -> Self {
        Self::with_scorer(MaterialCheckScorer)
    }
}

impl Default for MinimaxEngine<MaterialCheckScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            reply_depth: REPLY_DEPTH,
        }
    }

    pub fn with_reply_depth(mut self, reply_depth: u8) -> Self {
        self.reply_depth = reply_depth;
        self
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let budget = TimeBudget::start(params.time_budget);
        let perspective = position.side_to_move;
        let candidates = position.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("minimax_engine legal_moves {}", candidates.len()));

        let mut stats = SearchStats::default();
        let mut best: Option<(ChessMove, i32)> = None;
        let mut searched = 0usize;

        for generated in &candidates {
            if best.is_some() && budget.expired() {
                debug!(searched, total = candidates.len(), "minimax time budget exhausted");
                out.info_lines
                    .push(format!("minimax_engine budget_exhausted after {searched}"));
                break;
            }

            let alpha = best.map_or(i32::MIN, |(_, score)| score);
            let child = position.after(generated);
            let score = minimax(
                &child,
                self.reply_depth,
                alpha,
                i32::MAX,
                perspective,
                &self.scorer,
                &mut stats,
            );
            searched += 1;

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((generated.chess_move, score));
            }
        }

        if let Some((mv, score)) = best {
            out.info_lines.push(format!(
                "minimax_engine score {score} nodes {} cutoffs {} time_ms {}",
                stats.nodes,
                stats.cutoffs,
                budget.elapsed_ms()
            ));
            out.best_move = Some(mv);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::game_state::chess_types::ChessMove;
    use crate::game_state::position::Position;
    use crate::utils::fen::parse_fen;

    fn choose(fen: &str, params: &SearchParams) -> Option<ChessMove> {
        let (board, side) = parse_fen(fen).expect("FEN should parse");
        MinimaxEngine::new()
            .choose_move(&Position::new(board, side), params)
            .expect("minimax engine should not fail")
            .best_move
    }

    #[test]
    fn captures_an_undefended_queen() {
        // Bishop on c6 can take the white queen on e4; nothing defends it.
        let mv = choose("4k3/8/2b5/8/4Q3/8/8/K7 b", &SearchParams::default());
        assert_eq!(mv, Some(ChessMove::from_coords(2, 2, 4, 4)));
    }

    #[test]
    fn avoids_a_defended_pawn_with_the_queen() {
        // Qxd4 loses the queen to the c3 pawn; the queen should stay put.
        let mv = choose("3qk3/8/8/8/3P4/2P5/8/4K3 b", &SearchParams::default())
            .expect("black has moves");
        assert_ne!(mv, ChessMove::from_coords(0, 3, 4, 3));
    }

    #[test]
    fn mate_in_one_is_found() {
        // Rook a2 to a1 mates the white king boxed in by its own pawns.
        let mv = choose("6k1/8/8/8/8/8/r4PPP/6K1 b", &SearchParams::default());
        assert_eq!(mv, Some(ChessMove::from_coords(6, 0, 7, 0)));
    }

    #[test]
    fn exhausted_budget_still_returns_a_move() {
        let params = SearchParams {
            time_budget: Duration::ZERO,
        };
        let mv = choose(crate::game_state::chess_rules::STARTING_POSITION_FEN, &params);
        assert!(mv.is_some());
    }
}
