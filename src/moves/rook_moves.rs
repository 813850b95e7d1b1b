use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding::slide_along;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn rook_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_along(board, from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::rook_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let mut out = Vec::new();
        rook_destinations(&Board::empty(), Square::new(3, 3), Color::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_stops_before_own_piece_and_on_enemy_piece() {
        let board = Board::empty()
            .with_piece(Square::new(7, 2), Piece::new(PieceKind::Knight, Color::White))
            .with_piece(Square::new(4, 0), Piece::new(PieceKind::Pawn, Color::Black));
        let mut out = Vec::new();
        rook_destinations(&board, Square::new(7, 0), Color::White, &mut out);

        assert!(out.contains(&Square::new(7, 1)));
        assert!(!out.contains(&Square::new(7, 2)), "own knight must block");
        assert!(out.contains(&Square::new(4, 0)), "enemy pawn is capturable");
        assert!(!out.contains(&Square::new(3, 0)), "ray stops at the capture");
        assert_eq!(out.len(), 4);
    }
}
