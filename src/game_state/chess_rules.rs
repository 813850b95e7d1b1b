//! Canonical rule constants.
//!
//! Army sizes, point targets and retry budgets used by game setup, plus the
//! soft time ceiling for AI move selection.

use std::time::Duration;

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Back rank of the classic layout, a-file to h-file.
pub const STANDARD_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// File the king always starts on.
pub const KING_HOME_COL: u8 = 4;

/// Non-king pieces per army.
pub const ARMY_SIZE: usize = 15;

/// Exact material each army must total in the asymmetric mode.
pub const ARMY_POINT_TARGET: i32 = 39;

pub const MAX_ARMY_PAWNS: usize = 6;

/// Backtracking steps allowed while drawing one point-constrained army.
pub const ARMY_BACKTRACK_BUDGET: usize = 100;

/// Whole-army redraws before giving up on a point-constrained army.
pub const ARMY_DRAW_ATTEMPTS: usize = 1_000;

/// Whole-board regenerations before setup fails.
pub const SETUP_MAX_ATTEMPTS: usize = 10;

/// Category weights (pawn, knight, bishop, rook, queen) for the symmetric mode.
pub const SYMMETRIC_ARMY_WEIGHTS: [u32; 5] = [3, 2, 2, 2, 1];

/// Soft wall-clock ceiling for one AI move.
pub const AI_TIME_BUDGET: Duration = Duration::from_secs(5);

/// Pacing delay a front end waits before asking the AI for a move.
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(500);
