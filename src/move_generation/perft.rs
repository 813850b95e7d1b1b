//! Perft: counts leaf nodes of the legal move tree to verify the generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position_index::PositionIndex;
use crate::move_generation::legal_move_apply::is_promotion;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let index = PositionIndex::from_board(board);
    let mut total = PerftCounts::default();
    perft_recurse(board, &index, side, depth, &mut total);
    total
}

fn perft_recurse(
    board: &Board,
    index: &PositionIndex,
    side: Color,
    depth: u8,
    total: &mut PerftCounts,
) {
    for generated in generate_legal_moves(board, index, side) {
        let next_index = PositionIndex::from_board(&generated.board_after);

        if depth > 1 {
            perft_recurse(&generated.board_after, &next_index, side.opposite(), depth - 1, total);
            continue;
        }

        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if generated.captured.is_some() {
            leaf.captures = 1;
        }
        if is_promotion(generated.piece, generated.chess_move.to) {
            leaf.promotions = 1;
        }
        let opponent = side.opposite();
        if is_king_in_check(&generated.board_after, opponent, &next_index) {
            leaf.checks = 1;
            if !has_legal_moves(&generated.board_after, &next_index, opponent) {
                leaf.checkmates = 1;
            }
        }
        total.merge(leaf);
    }
}
