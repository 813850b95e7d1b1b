//! Crate-wide error type.
//!
//! Everything fallible in the engine reports through `ChessError`. Rule-level
//! no-ops (for example clicking a square that is not a legal destination) are
//! not errors and never show up here.

use thiserror::Error;

use crate::game_state::chess_types::{ChessMove, Color, GameMode, Square};
use crate::game_state::game_status::GameStatus;

/// Represents all possible error types that can occur in the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// No valid starting position was found within the retry budget.
    #[error("failed to generate a valid board after {attempts} attempts")]
    SetupFailure { attempts: usize },

    /// A randomized army could not hit its constraints.
    #[error("failed to draw a {mode} army after {attempts} attempts")]
    ArmyGenerationFailed { mode: GameMode, attempts: usize },

    /// An army handed to placement had the wrong number of pieces.
    #[error("army must have exactly {expected} non-king pieces, got {actual}")]
    InvalidArmySize { expected: usize, actual: usize },

    #[error("no piece on {0}")]
    NoPieceAtSquare(Square),

    #[error("piece on {square} does not belong to {side}, the side to move")]
    WrongSideToMove { square: Square, side: Color },

    #[error("illegal move {0}")]
    IllegalMove(ChessMove),

    /// The side has no legal move at all; this is a terminal position, not a fault.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),

    #[error("AI failed to select a move: {0}")]
    AiSelectionFailure(String),

    #[error("game is over ({0})")]
    GameOver(GameStatus),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid value '{value}' for {name}")]
    InvalidOption { name: &'static str, value: String },
}

/// Result type alias for chess engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
