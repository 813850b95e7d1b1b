//! Crate root module declarations for the random chess engine.
//!
//! Exposes the rules core (board, move generation, setup, status), the AI
//! engines, the interaction session, and utility helpers so the binaries,
//! benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod move_history;
    pub mod position;
    pub mod position_index;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod game_setup {
    pub mod army_generator;
    pub mod board_setup;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod ai_player;
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod army_summary;
    pub mod engine_match_harness;
    pub mod fen;
    pub mod render_game_state;
}
