//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The walk is synchronous and pure: a position goes in, a score comes out.
//! Moves are visited in generator order with no reordering.

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Scores `position` `depth` plies deep from `perspective`'s point of view.
///
/// Nodes where `perspective` is to move maximise, the others minimise. A side
/// with no legal moves is scored as mated (`MATE_SCORE`) when in check and
/// statically otherwise.
pub fn minimax<S: BoardScorer + ?Sized>(
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    perspective: Color,
    scorer: &S,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    if depth == 0 {
        return scorer.score(position, perspective);
    }

    let moves = position.legal_moves();
    let maximizing = position.side_to_move == perspective;
    if moves.is_empty() {
        if !position.is_in_check() {
            return scorer.score(position, perspective);
        }
        return if maximizing { -MATE_SCORE } else { MATE_SCORE };
    }

    if maximizing {
        let mut best = i32::MIN;
        for generated in &moves {
            let child = position.after(generated);
            let score = minimax(&child, depth - 1, alpha, beta, perspective, scorer, stats);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for generated in &moves {
            let child = position.after(generated);
            let score = minimax(&child, depth - 1, alpha, beta, perspective, scorer, stats);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::{minimax, SearchStats};
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::search::board_scoring::{MaterialCheckScorer, MATE_SCORE};
    use crate::utils::fen::parse_fen;

    fn position(fen: &str) -> Position {
        let (board, side) = parse_fen(fen).expect("FEN should parse");
        Position::new(board, side)
    }

    fn full_window(pos: &Position, depth: u8, perspective: Color) -> (i32, SearchStats) {
        let mut stats = SearchStats::default();
        let score = minimax(
            pos,
            depth,
            i32::MIN,
            i32::MAX,
            perspective,
            &MaterialCheckScorer,
            &mut stats,
        );
        (score, stats)
    }

    #[test]
    fn depth_zero_is_the_static_score() {
        let pos = position("4k3/8/8/8/8/8/8/3QK3 w");
        let (score, stats) = full_window(&pos, 0, Color::White);
        assert_eq!(score, 9);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn one_ply_finds_the_free_queen() {
        // Black rook on a1 can take the undefended white queen on a5.
        let pos = position("4k3/8/8/Q7/8/8/7K/r7 b");
        let (score, _) = full_window(&pos, 1, Color::Black);
        assert!(score >= 5, "capturing the queen should leave black ahead, got {score}");
    }

    #[test]
    fn replies_are_taken_into_account() {
        // Taking the pawn on d5 loses the queen to the e6 pawn.
        let pos = position("4k3/8/4p3/3p4/8/8/8/3QK3 w");
        let (score, _) = full_window(&pos, 2, Color::White);
        assert!(score < 9, "white should not be credited with a free pawn, got {score}");
    }

    #[test]
    fn mated_side_gets_the_mate_score() {
        let pos = position("4k3/8/8/8/8/8/1q6/r6K w");
        let (score, _) = full_window(&pos, 1, Color::Black);
        assert_eq!(score, MATE_SCORE);
        let (score, _) = full_window(&pos, 1, Color::White);
        assert_eq!(score, -MATE_SCORE);
    }

    #[test]
    fn pruning_does_not_change_the_result() {
        let pos = position("r3k2r/1P4P1/8/3pP3/2n1Q3/8/1p4p1/R3K1NR w");
        let (pruned, stats) = full_window(&pos, 2, Color::White);

        // Exhaustive max-min without bounds.
        let mut expected = i32::MIN;
        for generated in pos.legal_moves() {
            let child = pos.after(&generated);
            let mut inner = SearchStats::default();
            let reply = minimax(
                &child,
                1,
                i32::MIN,
                i32::MAX,
                Color::White,
                &MaterialCheckScorer,
                &mut inner,
            );
            expected = expected.max(reply);
        }
        assert_eq!(pruned, expected);
        assert!(stats.cutoffs > 0);
    }
}
