use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding::slide_along;

/// Rook rays first, then bishop rays.
pub fn queen_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_along(board, from, color, &ROOK_DIRECTIONS, out);
    slide_along(board, from, color, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::queen_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_in_center_reaches_twenty_seven_squares() {
        let mut out = Vec::new();
        queen_destinations(&Board::empty(), Square::new(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 27);
    }
}
