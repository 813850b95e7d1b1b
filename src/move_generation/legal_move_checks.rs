//! Check detection.
//!
//! A king is in check when any opposing piece's raw move set contains the
//! king's square. A color with no king is treated as not in check.

use tracing::{trace, warn};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position_index::{PieceEntry, PositionIndex};
use crate::move_generation::pseudo_legal_moves::generate_raw_moves;

#[inline]
pub fn king_square(index: &PositionIndex, color: Color) -> Option<Square> {
    index.king_square(color)
}

pub fn is_king_in_check(board: &Board, color: Color, index: &PositionIndex) -> bool {
    let Some(king_sq) = king_square(index, color) else {
        warn!(color = color.name(), "no king found; treating as not in check");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite(), index)
}

pub fn is_square_attacked(
    board: &Board,
    square: Square,
    attacker_color: Color,
    index: &PositionIndex,
) -> bool {
    first_attacker(board, square, attacker_color, index).is_some()
}

/// First piece of `attacker_color`, in index order, whose raw moves reach `square`.
pub fn first_attacker(
    board: &Board,
    square: Square,
    attacker_color: Color,
    index: &PositionIndex,
) -> Option<PieceEntry> {
    let mut scratch = Vec::with_capacity(28);
    for entry in index.entries(attacker_color) {
        scratch.clear();
        generate_raw_moves(entry.piece, entry.square, board, &mut scratch);
        if scratch.contains(&square) {
            trace!(
                attacker = entry.piece.kind.name(),
                from = %entry.square,
                target = %square,
                "square attacked"
            );
            return Some(*entry);
        }
    }
    None
}
