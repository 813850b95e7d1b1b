//! 8×8 grid of optional pieces.
//!
//! `Board` is a plain `Copy` value. Anything that "changes" a board builds a new
//! one, so simulated positions never alias the live game.

use crate::game_state::chess_rules::STANDARD_BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub const fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Classic initial position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in STANDARD_BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                board.set(Square::new(color.home_row(), col), Some(Piece::new(*kind, color)));
                board.set(
                    Square::new(color.pawn_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn at(&self, row: u8, col: u8) -> Cell {
        self.get(Square::new(row, col))
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Returns a copy with `piece` placed on `square`.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    /// Returns a copy with `square` emptied.
    #[must_use]
    pub fn without_piece(mut self, square: Square) -> Self {
        self.set(square, None);
        self
    }

    /// In-place write for builders that own a fresh board.
    #[inline]
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row as usize][square.col as usize] = cell;
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.occupied()
            .filter(|(_, piece)| piece.kind == kind && piece.color == color)
            .count()
    }

    /// Sum of piece values for one color.
    pub fn material(&self, color: Color) -> i32 {
        self.occupied()
            .filter(|(_, piece)| piece.color == color)
            .map(|(_, piece)| piece.kind.value())
            .sum()
    }
}
