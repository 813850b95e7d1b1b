//! Searchable snapshot: board, its index, and the side to move.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_status, StatusReport};
use crate::game_state::position_index::PositionIndex;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, has_legal_moves, legal_moves, GeneratedMove,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub index: PositionIndex,
    pub side_to_move: Color,
}

impl Position {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        let index = PositionIndex::from_board(&board);
        Self {
            board,
            index,
            side_to_move,
        }
    }

    pub fn from_parts(board: Board, index: PositionIndex, side_to_move: Color) -> Self {
        Self {
            board,
            index,
            side_to_move,
        }
    }

    pub fn legal_moves(&self) -> Vec<GeneratedMove> {
        generate_legal_moves(&self.board, &self.index, self.side_to_move)
    }

    /// Legal destinations of whatever piece stands on `from`.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.board.get(from) {
            Some(piece) => legal_moves(piece, from, &self.board, &self.index),
            None => Vec::new(),
        }
    }

    pub fn has_legal_moves(&self) -> bool {
        has_legal_moves(&self.board, &self.index, self.side_to_move)
    }

    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move, &self.index)
    }

    pub fn status(&self) -> StatusReport {
        evaluate_status(&self.board, self.side_to_move, &self.index)
    }

    /// Position after a move produced by this position's generator.
    pub fn after(&self, generated: &GeneratedMove) -> Position {
        Position::new(generated.board_after, self.side_to_move.opposite())
    }

    /// Validates `mv` for the side to move and returns the resulting position
    /// together with the generated move that was played.
    pub fn play(&self, mv: ChessMove) -> ChessResult<(Position, GeneratedMove)> {
        let piece = self
            .board
            .get(mv.from)
            .ok_or(ChessError::NoPieceAtSquare(mv.from))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::WrongSideToMove {
                square: mv.from,
                side: self.side_to_move,
            });
        }
        if !legal_moves(piece, mv.from, &self.board, &self.index).contains(&mv.to) {
            return Err(ChessError::IllegalMove(mv));
        }

        let generated = GeneratedMove {
            chess_move: mv,
            piece,
            captured: self.board.get(mv.to),
            board_after: apply_move(&self.board, mv)?,
        };
        Ok((self.after(&generated), generated))
    }
}
