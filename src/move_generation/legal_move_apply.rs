//! Move application for live and simulated boards.
//!
//! No legality checking happens here; callers validate through the legal move
//! generator before committing a move to game state.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position_index::PositionIndex;

/// The piece that lands on `to`: pawns reaching their promotion row become queens.
#[inline]
pub fn piece_after_move(piece: Piece, to: Square) -> Piece {
    if is_promotion(piece, to) {
        Piece::new(PieceKind::Queen, piece.color)
    } else {
        piece
    }
}

#[inline]
pub fn is_promotion(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row()
}

/// Returns the board after `mv`, or an error if the origin square is empty.
pub fn apply_move(board: &Board, mv: ChessMove) -> ChessResult<Board> {
    let piece = board
        .get(mv.from)
        .ok_or(ChessError::NoPieceAtSquare(mv.from))?;
    Ok(apply_move_with_piece(board, piece, mv))
}

/// Same as [`apply_move`] for callers that already looked up the moving piece.
#[inline]
pub(crate) fn apply_move_with_piece(board: &Board, piece: Piece, mv: ChessMove) -> Board {
    let mut next = *board;
    next.set(mv.to, Some(piece_after_move(piece, mv.to)));
    next.set(mv.from, None);
    next
}

/// Applies `mv` and rebuilds the position index for the resulting board.
pub fn apply_move_indexed(board: &Board, mv: ChessMove) -> ChessResult<(Board, PositionIndex)> {
    let next = apply_move(board, mv)?;
    let index = PositionIndex::from_board(&next);
    Ok((next, index))
}
