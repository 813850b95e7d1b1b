//! Per-color piece lists derived from a `Board`.
//!
//! The index is a cache: for each color it lists exactly the occupied cells of
//! that color. `from_board` rebuilds it in row-major order and is what committed
//! game state uses. `after_move` patches only the squares a move touches and is
//! reserved for throwaway boards inside legality checks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::piece_after_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceEntry {
    pub piece: Piece,
    pub square: Square,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    by_color: [Vec<PieceEntry>; 2],
}

impl PositionIndex {
    pub fn from_board(board: &Board) -> Self {
        let mut index = Self::default();
        for (square, piece) in board.occupied() {
            index.by_color[piece.color.index()].push(PieceEntry { piece, square });
        }
        index
    }

    #[inline]
    pub fn entries(&self, color: Color) -> &[PieceEntry] {
        &self.by_color[color.index()]
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.entries(color)
            .iter()
            .find(|entry| entry.piece.kind == PieceKind::King)
            .map(|entry| entry.square)
    }

    /// Index for the board that results from playing `mv` on `before`.
    ///
    /// `self` must describe `before`. Entry order is not preserved relative to a
    /// full rebuild; the set of entries is.
    pub fn after_move(&self, before: &Board, mv: ChessMove) -> Self {
        let mut next = self.clone();
        let Some(moving) = before.get(mv.from) else {
            return next;
        };

        if let Some(captured) = before.get(mv.to) {
            next.by_color[captured.color.index()].retain(|entry| entry.square != mv.to);
        }

        let placed = piece_after_move(moving, mv.to);
        if let Some(entry) = next.by_color[moving.color.index()]
            .iter_mut()
            .find(|entry| entry.square == mv.from)
        {
            entry.square = mv.to;
            entry.piece = placed;
        }
        next
    }

    /// True when this index lists exactly the pieces on `board`, ignoring order.
    pub fn matches_board(&self, board: &Board) -> bool {
        let rebuilt = Self::from_board(board);
        [Color::White, Color::Black].into_iter().all(|color| {
            let mut ours = self.entries(color).to_vec();
            let mut theirs = rebuilt.entries(color).to_vec();
            ours.sort_by_key(|entry| entry.square);
            theirs.sort_by_key(|entry| entry.square);
            ours == theirs
        })
    }
}
