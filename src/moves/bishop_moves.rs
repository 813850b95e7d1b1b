use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding::slide_along;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_along(board, from, color, &BISHOP_DIRECTIONS, out);
}
