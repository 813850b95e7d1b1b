//! Legal move filtering.
//!
//! Every pseudo-legal destination is played on a scratch board; it is legal iff
//! the mover's own king is not attacked afterwards. The same rule covers
//! escaping an existing check and avoiding self-check.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position_index::PositionIndex;
use crate::move_generation::legal_move_apply::apply_move_with_piece;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal_moves::raw_moves;

/// A legal move together with what it captures and the board it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub board_after: Board,
}

/// Legal destinations for `piece` standing on `from`.
pub fn legal_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    index: &PositionIndex,
) -> Vec<Square> {
    raw_moves(piece, from, board)
        .into_iter()
        .filter(|&to| {
            let mv = ChessMove::new(from, to);
            let (_, still_in_check) = simulate(board, index, piece, mv);
            !still_in_check
        })
        .collect()
}

/// Every legal move for `color`, in index order then raw-move order.
pub fn generate_legal_moves(
    board: &Board,
    index: &PositionIndex,
    color: Color,
) -> Vec<GeneratedMove> {
    let mut legal = Vec::with_capacity(64);
    for entry in index.entries(color) {
        for to in raw_moves(entry.piece, entry.square, board) {
            let mv = ChessMove::new(entry.square, to);
            let (board_after, in_check) = simulate(board, index, entry.piece, mv);
            if in_check {
                continue;
            }
            legal.push(GeneratedMove {
                chess_move: mv,
                piece: entry.piece,
                captured: board.get(to),
                board_after,
            });
        }
    }
    legal
}

/// Short-circuits on the first legal move found.
pub fn has_legal_moves(board: &Board, index: &PositionIndex, color: Color) -> bool {
    index
        .entries(color)
        .iter()
        .any(|entry| !legal_moves(entry.piece, entry.square, board, index).is_empty())
}

/// True if `mv` moves a `side` piece to one of its legal destinations.
pub fn is_legal_move(board: &Board, index: &PositionIndex, side: Color, mv: ChessMove) -> bool {
    match board.get(mv.from) {
        Some(piece) if piece.color == side => {
            legal_moves(piece, mv.from, board, index).contains(&mv.to)
        }
        _ => false,
    }
}

fn simulate(board: &Board, index: &PositionIndex, piece: Piece, mv: ChessMove) -> (Board, bool) {
    let next = apply_move_with_piece(board, piece, mv);
    let next_index = index.after_move(board, mv);
    let in_check = is_king_in_check(&next, piece.color, &next_index);
    (next, in_check)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate_legal_moves, has_legal_moves, is_legal_move, legal_moves};
    use crate::game_setup::board_setup::setup;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::game_state::position_index::PositionIndex;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::fen::parse_fen;

    fn position(fen: &str) -> (Board, PositionIndex, Color) {
        let (board, side) = parse_fen(fen).expect("FEN should parse");
        let index = PositionIndex::from_board(&board);
        (board, index, side)
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let board = Board::standard();
        let index = PositionIndex::from_board(&board);
        assert_eq!(generate_legal_moves(&board, &index, Color::White).len(), 20);
        assert_eq!(generate_legal_moves(&board, &index, Color::Black).len(), 20);
    }

    #[test]
    fn pinned_knight_has_no_legal_moves() {
        let (board, index, _) = position("4r3/8/8/8/8/8/4N3/4K3 w");
        let knight = Piece::new(PieceKind::Knight, Color::White);
        assert!(legal_moves(knight, Square::new(6, 4), &board, &index).is_empty());
    }

    #[test]
    fn only_check_escapes_are_legal() {
        // White king e1 checked by the rook on e8; the bishop can block on e3
        // or the king can step aside.
        let (board, index, side) = position("4r2k/8/8/8/8/8/3B4/4K3 w");
        let moves = generate_legal_moves(&board, &index, side);
        for generated in &moves {
            let next = apply_move(&board, generated.chess_move).expect("legal move should apply");
            let next_index = PositionIndex::from_board(&next);
            assert!(!is_king_in_check(&next, side, &next_index));
        }
        let bishop_moves: Vec<_> = moves
            .iter()
            .filter(|m| m.piece.kind == PieceKind::Bishop)
            .map(|m| m.chess_move.to)
            .collect();
        assert_eq!(bishop_moves, vec![Square::new(5, 4)]);
        let king_targets: Vec<_> = moves
            .iter()
            .filter(|m| m.piece.kind == PieceKind::King)
            .map(|m| m.chess_move.to)
            .collect();
        assert_eq!(king_targets.len(), 3);
        assert!(!king_targets.contains(&Square::new(6, 4)));
    }

    #[test]
    fn king_cannot_step_onto_attacked_squares() {
        let (board, index, _) = position("7k/8/8/8/8/8/3rr3/K7 w");
        let king = Piece::new(PieceKind::King, Color::White);
        let targets = legal_moves(king, Square::new(7, 0), &board, &index);
        assert_eq!(targets, vec![Square::new(7, 1)]);
    }

    #[test]
    fn generated_moves_record_captures() {
        let (board, index, side) = position("4k3/8/8/3q4/4P3/8/8/4K3 w");
        let capture = generate_legal_moves(&board, &index, side)
            .into_iter()
            .find(|m| m.chess_move == ChessMove::from_coords(4, 4, 3, 3))
            .expect("exd5 should be legal");
        assert_eq!(capture.captured, Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(capture.board_after.at(3, 3), Some(Piece::new(PieceKind::Pawn, Color::White)));
    }

    #[test]
    fn legality_check_rejects_wrong_side_and_bad_targets() {
        let board = Board::standard();
        let index = PositionIndex::from_board(&board);
        assert!(is_legal_move(&board, &index, Color::White, ChessMove::from_coords(6, 4, 4, 4)));
        assert!(!is_legal_move(&board, &index, Color::White, ChessMove::from_coords(6, 4, 3, 4)));
        assert!(!is_legal_move(&board, &index, Color::Black, ChessMove::from_coords(6, 4, 4, 4)));
        assert!(!is_legal_move(&board, &index, Color::White, ChessMove::from_coords(4, 4, 3, 4)));
    }

    #[test]
    fn legal_moves_never_leave_own_king_in_check_on_random_setups() {
        let mut rng = StdRng::seed_from_u64(11);
        for mode in GameMode::ALL {
            let game = setup(mode, &mut rng).expect("setup should succeed");
            let board = game.board;
            let index = PositionIndex::from_board(&board);
            for color in [Color::White, Color::Black] {
                assert!(has_legal_moves(&board, &index, color));
                for generated in generate_legal_moves(&board, &index, color) {
                    let next_index = PositionIndex::from_board(&generated.board_after);
                    assert!(
                        !is_king_in_check(&generated.board_after, color, &next_index),
                        "{} left {color} in check in {mode}",
                        generated.chess_move
                    );
                }
            }
        }
    }
}
