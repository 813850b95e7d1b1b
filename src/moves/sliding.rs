//! Shared ray walker for rooks, bishops and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Walks each ray until the edge, stopping before an own piece and after an
/// enemy piece.
pub fn slide_along(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from.offset(d_row, d_col);
        while let Some(square) = current {
            match board.get(square) {
                None => out.push(square),
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(square);
                    }
                    break;
                }
            }
            current = square.offset(d_row, d_col);
        }
    }
}

/// Fixed-offset leaper destinations (knight, king): empty or enemy-occupied.
pub fn leap_to(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(square) = from.offset(d_row, d_col) else {
            continue;
        };
        if !matches!(board.get(square), Some(occupant) if occupant.color == color) {
            out.push(square);
        }
    }
}
