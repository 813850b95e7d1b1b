//! Status classification for the side to move.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position_index::PositionIndex;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
    /// Set only when AI selection fails; the game needs a reset.
    Error,
}

impl GameStatus {
    /// Moves may still be made.
    #[inline]
    pub const fn is_playable(self) -> bool {
        matches!(self, GameStatus::Active | GameStatus::Check)
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Active => "active",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// A status plus the banner text that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub status: GameStatus,
    pub message: String,
}

impl StatusReport {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: GameStatus::Error,
            message: message.into(),
        }
    }
}

pub fn evaluate_status(board: &Board, side_to_move: Color, index: &PositionIndex) -> StatusReport {
    let in_check = is_king_in_check(board, side_to_move, index);
    let can_move = has_legal_moves(board, index, side_to_move);

    let (status, message) = match (can_move, in_check) {
        (false, true) => (
            GameStatus::Checkmate,
            format!("Checkmate! {} wins!", side_to_move.opposite()),
        ),
        (false, false) => (GameStatus::Stalemate, "Stalemate! Draw.".to_owned()),
        (true, true) => (GameStatus::Check, format!("{side_to_move} is in check!")),
        (true, false) => (GameStatus::Active, format!("{side_to_move} to move")),
    };
    StatusReport { status, message }
}

#[cfg(test)]
mod tests {
    use super::{evaluate_status, GameStatus};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position_index::PositionIndex;
    use crate::utils::fen::parse_fen;

    fn status_of(fen: &str) -> super::StatusReport {
        let (board, side) = parse_fen(fen).expect("FEN should parse");
        let index = PositionIndex::from_board(&board);
        evaluate_status(&board, side, &index)
    }

    #[test]
    fn start_position_is_active() {
        let board = Board::standard();
        let index = PositionIndex::from_board(&board);
        let report = evaluate_status(&board, Color::White, &index);
        assert_eq!(report.status, GameStatus::Active);
        assert_eq!(report.message, "White to move");
    }

    #[test]
    fn queen_and_rook_mate_the_cornered_white_king() {
        // Rook on a1 covers the back rank, queen on b2 covers the second rank.
        let report = status_of("4k3/8/8/8/8/8/1q6/r6K w");
        assert_eq!(report.status, GameStatus::Checkmate);
        assert_eq!(report.message, "Checkmate! Black wins!");
    }

    #[test]
    fn rook_check_with_escape_squares_is_only_check() {
        // Queen e8 and rook h1 against the king on e1: d2 and f2 stay open.
        let report = status_of("4q3/8/8/8/8/8/8/4K2r w");
        assert_eq!(report.status, GameStatus::Check);
        assert_eq!(report.message, "White is in check!");
    }

    #[test]
    fn boxed_in_king_without_check_is_stalemate() {
        let report = status_of("7k/5Q2/6K1/8/8/8/8/8 b");
        assert_eq!(report.status, GameStatus::Stalemate);
        assert_eq!(report.message, "Stalemate! Draw.");
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let (board, side) = parse_fen("4q3/8/8/8/8/8/8/4K2r w").expect("FEN should parse");
        let index = PositionIndex::from_board(&board);
        let first = evaluate_status(&board, side, &index);
        let second = evaluate_status(&board, side, &index);
        assert_eq!(first, second);
        assert_eq!(index, PositionIndex::from_board(&board));
    }

    #[test]
    fn only_active_and_check_are_playable() {
        assert!(GameStatus::Active.is_playable());
        assert!(GameStatus::Check.is_playable());
        assert!(!GameStatus::Checkmate.is_playable());
        assert!(!GameStatus::Error.is_playable());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(!GameStatus::Error.is_terminal());
    }
}
