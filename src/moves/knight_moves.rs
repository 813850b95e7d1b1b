use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding::leap_to;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn knight_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    leap_to(board, from, color, &KNIGHT_OFFSETS, out);
}
