//! Army drawing for the randomized modes.
//!
//! An army is the list of 15 non-king pieces one color starts with.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::{GameMode, PieceKind, ARMY_PIECE_KINDS};

/// Non-king pieces of the classic layout.
pub fn standard_army() -> Vec<PieceKind> {
    let mut army = vec![PieceKind::Queen];
    army.extend([PieceKind::Rook; 2]);
    army.extend([PieceKind::Knight; 2]);
    army.extend([PieceKind::Bishop; 2]);
    army.extend([PieceKind::Pawn; 8]);
    army
}

pub fn generate_army<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> ChessResult<Vec<PieceKind>> {
    match mode {
        GameMode::Standard => Ok(standard_army()),
        GameMode::RandomSame => weighted_army(rng),
        GameMode::RandomDifferent => point_balanced_army(rng),
        GameMode::RandomCrazy => Ok(uniform_army(rng)),
    }
}

pub fn army_points(army: &[PieceKind]) -> i32 {
    army.iter().map(|kind| kind.value()).sum()
}

pub fn pawn_count(army: &[PieceKind]) -> usize {
    army.iter().filter(|kind| **kind == PieceKind::Pawn).count()
}

/// Weighted category draw; pawns past the cap are redrawn.
fn weighted_army<R: Rng + ?Sized>(rng: &mut R) -> ChessResult<Vec<PieceKind>> {
    let weights =
        WeightedIndex::new(SYMMETRIC_ARMY_WEIGHTS).map_err(|_| ChessError::ArmyGenerationFailed {
            mode: GameMode::RandomSame,
            attempts: 0,
        })?;

    let mut army = Vec::with_capacity(ARMY_SIZE);
    while army.len() < ARMY_SIZE {
        let kind = ARMY_PIECE_KINDS[weights.sample(rng)];
        if kind == PieceKind::Pawn && pawn_count(&army) >= MAX_ARMY_PAWNS {
            continue;
        }
        army.push(kind);
    }
    Ok(army)
}

/// Uniform category per slot; pawns past the cap are redrawn.
fn uniform_army<R: Rng + ?Sized>(rng: &mut R) -> Vec<PieceKind> {
    let mut army = Vec::with_capacity(ARMY_SIZE);
    while army.len() < ARMY_SIZE {
        let kind = ARMY_PIECE_KINDS[rng.random_range(0..ARMY_PIECE_KINDS.len())];
        if kind == PieceKind::Pawn && pawn_count(&army) >= MAX_ARMY_PAWNS {
            continue;
        }
        army.push(kind);
    }
    army
}

fn point_balanced_army<R: Rng + ?Sized>(rng: &mut R) -> ChessResult<Vec<PieceKind>> {
    for attempt in 1..=ARMY_DRAW_ATTEMPTS {
        if let Some(army) = draw_point_balanced_army(rng) {
            debug!(attempt, "drew point-balanced army");
            return Ok(army);
        }
    }
    Err(ChessError::ArmyGenerationFailed {
        mode: GameMode::RandomDifferent,
        attempts: ARMY_DRAW_ATTEMPTS,
    })
}

/// One constrained draw: each slot picks uniformly among kinds that keep the
/// target reachable, popping the last piece when nothing fits. Gives up after
/// the backtrack budget is spent.
fn draw_point_balanced_army<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec<PieceKind>> {
    let mut army: Vec<PieceKind> = Vec::with_capacity(ARMY_SIZE);
    let mut points = 0;
    let mut backtracks = 0;

    while army.len() < ARMY_SIZE && backtracks < ARMY_BACKTRACK_BUDGET {
        let remaining = ARMY_SIZE - army.len();
        let budget = ARMY_POINT_TARGET - points;
        let pawns = pawn_count(&army);

        let candidates: Vec<PieceKind> = ARMY_PIECE_KINDS
            .iter()
            .copied()
            .filter(|kind| {
                let is_pawn = *kind == PieceKind::Pawn;
                if is_pawn && pawns >= MAX_ARMY_PAWNS {
                    return false;
                }
                let left = budget - kind.value();
                if remaining == 1 {
                    return left == 0;
                }
                let pawns_available = MAX_ARMY_PAWNS - pawns - usize::from(is_pawn);
                can_fill(remaining - 1, left, pawns_available)
            })
            .collect();

        match candidates.choose(rng) {
            Some(kind) => {
                army.push(*kind);
                points += kind.value();
            }
            None => {
                if let Some(removed) = army.pop() {
                    points -= removed.value();
                }
                backtracks += 1;
            }
        }
    }

    (army.len() == ARMY_SIZE && points == ARMY_POINT_TARGET).then_some(army)
}

/// Necessary conditions for `slots` pieces to total exactly `points`.
fn can_fill(slots: usize, points: i32, pawns_available: usize) -> bool {
    let slots_i = slots as i32;
    let cheap = slots.min(pawns_available) as i32;
    let min = cheap + (slots_i - cheap) * PieceKind::Knight.value();
    let max = slots_i * PieceKind::Queen.value();
    // Every piece value is odd, so the sum has the parity of the count.
    (min..=max).contains(&points) && (points - slots_i) % 2 == 0
}
