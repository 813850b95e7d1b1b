//! Append-only record of committed moves, kept for display.

use std::fmt;

use chrono::{DateTime, Local};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::is_promotion;
use crate::move_generation::legal_move_generator::GeneratedMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistoryEntry {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub played_at: DateTime<Local>,
}

impl MoveHistoryEntry {
    pub fn record(generated: &GeneratedMove) -> Self {
        Self {
            piece: generated.piece,
            from: generated.chess_move.from,
            to: generated.chess_move.to,
            captured: generated.captured,
            promoted: is_promotion(generated.piece, generated.chess_move.to),
            played_at: Local::now(),
        }
    }

    pub fn chess_move(&self) -> ChessMove {
        ChessMove::new(self.from, self.to)
    }
}

impl fmt::Display for MoveHistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to {}", self.piece.kind, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::MoveHistoryEntry;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;

    #[test]
    fn entry_renders_piece_and_squares() {
        let start = Position::new(Board::standard(), Color::White);
        let (_, played) = start
            .play(ChessMove::from_coords(6, 4, 4, 4))
            .expect("e2e4 should be legal");
        let entry = MoveHistoryEntry::record(&played);
        assert_eq!(entry.to_string(), "pawn e2 to e4");
        assert_eq!(entry.captured, None);
        assert!(!entry.promoted);
        assert_eq!(entry.chess_move(), ChessMove::from_coords(6, 4, 4, 4));
    }
}
