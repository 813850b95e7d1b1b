//! Pseudo-legal destinations per piece, ignoring whether the mover's own king
//! ends up attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

pub fn generate_raw_moves(piece: Piece, from: Square, board: &Board, out: &mut Vec<Square>) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, color, out),
        PieceKind::Knight => knight_destinations(board, from, color, out),
        PieceKind::Bishop => bishop_destinations(board, from, color, out),
        PieceKind::Rook => rook_destinations(board, from, color, out),
        PieceKind::Queen => queen_destinations(board, from, color, out),
        PieceKind::King => king_destinations(board, from, color, out),
    }
}

pub fn raw_moves(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_raw_moves(piece, from, board, &mut out);
    out
}
