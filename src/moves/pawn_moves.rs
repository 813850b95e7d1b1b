//! Pawn pushes and diagonal captures. No en-passant.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub fn pawn_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);
            if from.row == color.pawn_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        if board.get(target).is_some_and(|occupant| occupant.color != color) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
        let mut out = Vec::new();
        pawn_destinations(board, from, color, &mut out);
        out
    }

    #[test]
    fn white_pawn_on_start_rank_can_push_one_or_two() {
        let out = destinations(&Board::empty(), Square::new(6, 4), Color::White);
        assert_eq!(out, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let out = destinations(&Board::empty(), Square::new(1, 0), Color::Black);
        assert_eq!(out, vec![Square::new(2, 0), Square::new(3, 0)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::empty()
            .with_piece(Square::new(5, 4), Piece::new(PieceKind::Knight, Color::Black));
        assert!(destinations(&board, Square::new(6, 4), Color::White).is_empty());

        let board = Board::empty()
            .with_piece(Square::new(4, 4), Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(
            destinations(&board, Square::new(6, 4), Color::White),
            vec![Square::new(5, 4)]
        );
    }

    #[test]
    fn pawn_captures_only_enemy_pieces_diagonally() {
        let board = Board::empty()
            .with_piece(Square::new(3, 2), Piece::new(PieceKind::Rook, Color::Black))
            .with_piece(Square::new(3, 4), Piece::new(PieceKind::Rook, Color::White));
        let out = destinations(&board, Square::new(4, 3), Color::White);
        assert_eq!(out, vec![Square::new(3, 3), Square::new(3, 2)]);
    }

    #[test]
    fn pawn_off_start_rank_moves_one_square() {
        let out = destinations(&Board::empty(), Square::new(5, 4), Color::White);
        assert_eq!(out, vec![Square::new(4, 4)]);
    }
}
