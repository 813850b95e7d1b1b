//! Whole-game snapshot.
//!
//! `GameState` bundles the board, its index, side to move, status, history and
//! the starting armies. Every transition (setup, move, error) returns a new
//! `GameState`, so a snapshot is always internally consistent.

use rand::Rng;
use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_setup::board_setup::{setup, GameSetup};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{GameStatus, StatusReport};
use crate::game_state::move_history::MoveHistoryEntry;
use crate::game_state::position::Position;
use crate::game_state::position_index::PositionIndex;
use crate::utils::fen::{generate_fen, parse_fen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub mode: GameMode,
    pub position: Position,
    pub status: StatusReport,
    pub history: Vec<MoveHistoryEntry>,
    pub white_army: Vec<PieceKind>,
    pub black_army: Vec<PieceKind>,
}

impl GameState {
    /// Generates a starting position for `mode`; White moves first.
    pub fn new_game<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> ChessResult<Self> {
        Ok(Self::from_setup(mode, setup(mode, rng)?))
    }

    pub fn from_setup(mode: GameMode, game_setup: GameSetup) -> Self {
        let position = Position::new(game_setup.board, Color::White);
        let status = position.status();
        Self {
            mode,
            position,
            status,
            history: Vec::new(),
            white_army: game_setup.white_army,
            black_army: game_setup.black_army,
        }
    }

    /// Builds a game from a FEN placement (plus optional side to move). The
    /// armies are read off the board.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let (board, side) = parse_fen(fen)?;
        let position = Position::new(board, side);
        let status = position.status();
        Ok(Self {
            mode: GameMode::Standard,
            white_army: army_on_board(&board, Color::White),
            black_army: army_on_board(&board, Color::Black),
            position,
            status,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[inline]
    pub fn index(&self) -> &PositionIndex {
        &self.position.index
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn army(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::White => &self.white_army,
            Color::Black => &self.black_army,
        }
    }

    /// Legal destinations for a piece of the side to move; empty otherwise.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.board().get(from) {
            Some(piece) if piece.color == self.side_to_move() => {
                self.position.legal_destinations(from)
            }
            _ => Vec::new(),
        }
    }

    /// Commits a validated move and re-classifies the position.
    pub fn play_move(&self, mv: ChessMove) -> ChessResult<GameState> {
        if !self.status.status.is_playable() {
            return Err(ChessError::GameOver(self.status.status));
        }

        let (position, played) = self.position.play(mv)?;
        let status = position.status();
        debug!(
            piece = played.piece.kind.name(),
            color = played.piece.color.name(),
            mv = %mv,
            status = %status.status,
            "move committed"
        );

        let mut history = self.history.clone();
        history.push(MoveHistoryEntry::record(&played));

        Ok(GameState {
            mode: self.mode,
            position,
            status,
            history,
            white_army: self.white_army.clone(),
            black_army: self.black_army.clone(),
        })
    }

    /// Same snapshot with the status forced to `Error`.
    pub fn with_error(&self, message: impl Into<String>) -> GameState {
        GameState {
            status: StatusReport::error(message),
            ..self.clone()
        }
    }

    /// Same snapshot with the status re-evaluated from the board.
    pub fn reclassified(&self) -> GameState {
        GameState {
            status: self.position.status(),
            ..self.clone()
        }
    }

    pub fn is_over(&self) -> bool {
        !self.status.status.is_playable()
    }

    pub fn winner(&self) -> Option<Color> {
        (self.status.status == GameStatus::Checkmate).then(|| self.side_to_move().opposite())
    }

    pub fn get_fen(&self) -> String {
        generate_fen(self.board(), self.side_to_move())
    }
}

/// King first, then the remaining pieces in board order.
fn army_on_board(board: &Board, color: Color) -> Vec<PieceKind> {
    let mut army: Vec<PieceKind> = board
        .occupied()
        .filter(|(_, piece)| piece.color == color)
        .map(|(_, piece)| piece.kind)
        .collect();
    army.sort_by_key(|kind| *kind != PieceKind::King);
    army
}
