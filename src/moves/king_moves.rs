use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding::leap_to;

/// One step in every direction; castling is not part of this rule set.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn king_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    leap_to(board, from, color, &KING_OFFSETS, out);
}
