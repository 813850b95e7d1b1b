//! Starting-position construction for every game mode.
//!
//! Random modes place the king on its home file and shuffle the army over the
//! remaining fifteen squares of the color's first two ranks. A candidate board
//! is kept only when neither king is in check and both sides can move.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_setup::army_generator::{generate_army, standard_army};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{ARMY_SIZE, KING_HOME_COL, SETUP_MAX_ATTEMPTS};
use crate::game_state::chess_types::*;
use crate::game_state::position_index::PositionIndex;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_moves;

/// A validated starting board and the armies it was built from. Each army
/// lists the king first, followed by the non-king pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub board: Board,
    pub white_army: Vec<PieceKind>,
    pub black_army: Vec<PieceKind>,
}

pub fn setup<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> ChessResult<GameSetup> {
    setup_with_validator(mode, rng, is_valid_start)
}

/// Attempt loop behind `setup`; `is_valid` decides whether a candidate board
/// is kept.
pub(crate) fn setup_with_validator<R, F>(
    mode: GameMode,
    rng: &mut R,
    mut is_valid: F,
) -> ChessResult<GameSetup>
where
    R: Rng + ?Sized,
    F: FnMut(&Board) -> bool,
{
    for attempt in 1..=SETUP_MAX_ATTEMPTS {
        let candidate = match build_candidate(mode, rng) {
            Ok(candidate) => candidate,
            Err(err) => {
                debug!(%mode, attempt, %err, "regenerating board: army drawing failed");
                continue;
            }
        };
        if is_valid(&candidate.board) {
            debug!(%mode, attempt, "generated starting position");
            return Ok(candidate);
        }
        debug!(%mode, attempt, "regenerating board: a king is in check or a side cannot move");
    }
    Err(ChessError::SetupFailure {
        attempts: SETUP_MAX_ATTEMPTS,
    })
}

/// Neither king attacked and both sides have at least one legal move.
pub fn is_valid_start(board: &Board) -> bool {
    let index = PositionIndex::from_board(board);
    [Color::White, Color::Black].into_iter().all(|color| {
        index.king_square(color).is_some()
            && !is_king_in_check(board, color, &index)
            && has_legal_moves(board, &index, color)
    })
}

fn build_candidate<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> ChessResult<GameSetup> {
    let (board, white, black) = match mode {
        GameMode::Standard => (Board::standard(), standard_army(), standard_army()),
        GameMode::RandomSame => {
            let army = generate_army(mode, rng)?;
            let board = place_army(Board::empty(), Color::White, &army, rng)?;
            let board = place_army(board, Color::Black, &army, rng)?;
            (board, army.clone(), army)
        }
        GameMode::RandomDifferent | GameMode::RandomCrazy => {
            let white = generate_army(mode, rng)?;
            let black = generate_army(mode, rng)?;
            let board = place_army(Board::empty(), Color::White, &white, rng)?;
            let board = place_army(board, Color::Black, &black, rng)?;
            (board, white, black)
        }
    };

    Ok(GameSetup {
        board,
        white_army: with_king(white),
        black_army: with_king(black),
    })
}

/// Places the king on its home square and shuffles `army` over the other
/// fifteen squares of the color's first two ranks.
pub fn place_army<R: Rng + ?Sized>(
    board: Board,
    color: Color,
    army: &[PieceKind],
    rng: &mut R,
) -> ChessResult<Board> {
    if army.len() != ARMY_SIZE {
        return Err(ChessError::InvalidArmySize {
            expected: ARMY_SIZE,
            actual: army.len(),
        });
    }

    let home = color.home_row();
    let front = color.pawn_row();
    let mut squares = Vec::with_capacity(ARMY_SIZE);
    for col in 0..BOARD_SIZE as u8 {
        if col != KING_HOME_COL {
            squares.push(Square::new(home, col));
        }
        squares.push(Square::new(front, col));
    }
    squares.shuffle(rng);

    let mut next = board
        .with_piece(Square::new(home, KING_HOME_COL), Piece::new(PieceKind::King, color));
    for (square, kind) in squares.into_iter().zip(army) {
        next = next.with_piece(square, Piece::new(*kind, color));
    }
    Ok(next)
}

fn with_king(army: Vec<PieceKind>) -> Vec<PieceKind> {
    let mut full = Vec::with_capacity(army.len() + 1);
    full.push(PieceKind::King);
    full.extend(army);
    full
}
