//! Interaction controller for one game.
//!
//! `GameSession` turns square clicks into selections and moves, tracks whose
//! turn it is, and drives the AI for Black when the opponent is the computer.
//! The pacing delay before an AI move belongs to the front end: it calls
//! `begin_ai_turn`, waits `config().ai_delay`, then calls `play_ai_turn`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};

use crate::engines::ai_player::AiPlayer;
use crate::engines::engine_trait::{Difficulty, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{AI_MOVE_DELAY, AI_TIME_BUDGET};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameStatus;

pub const AI_FAILURE_MESSAGE: &str = "AI failed to move. Please start a new game.";

const AI_THINKING_SUFFIX: &str = " (AI thinking...)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Opponent {
    #[default]
    Ai,
    Human,
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Opponent::Ai => "ai",
            Opponent::Human => "human",
        })
    }
}

impl FromStr for Opponent {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "computer" => Ok(Opponent::Ai),
            "human" => Ok(Opponent::Human),
            _ => Err(ChessError::InvalidOption {
                name: "opponent",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub opponent: Opponent,
    pub difficulty: Difficulty,
    /// Pause the front end takes before asking the AI to move.
    pub ai_delay: Duration,
    pub time_budget: Duration,
    /// Seeds setup and AI randomness; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Standard,
            opponent: Opponent::Ai,
            difficulty: Difficulty::Medium,
            ai_delay: AI_MOVE_DELAY,
            time_budget: AI_TIME_BUDGET,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The game is over, the AI is thinking, or it is the AI's turn.
    Ignored,
    Selected(Square),
    Deselected,
    Moved(ChessMove),
    /// Not an own piece and not a legal destination. Nothing changed.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTurnOutcome {
    Moved(ChessMove),
    /// Black had no legal move; the status now reports the finished game.
    Finished,
    /// Selection failed; the session is in the error state until reset.
    Failed,
    NotAiTurn,
}

pub struct GameSession {
    config: SessionConfig,
    game: GameState,
    selected: Option<Square>,
    ai_thinking: bool,
    ai: AiPlayer,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let game = GameState::new_game(config.mode, &mut rng)?;
        Ok(Self::assemble(config, game, rng))
    }

    /// Session around an existing game, for resuming from a FEN.
    pub fn from_game(config: SessionConfig, game: GameState) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::assemble(config, game, rng)
    }

    fn assemble(config: SessionConfig, game: GameState, rng: StdRng) -> Self {
        let ai = match config.seed {
            Some(seed) => AiPlayer::with_seed(config.difficulty, seed),
            None => AiPlayer::new(config.difficulty),
        };
        info!(
            mode = %config.mode,
            opponent = %config.opponent,
            difficulty = %config.difficulty,
            "new game"
        );
        Self {
            config,
            game,
            selected: None,
            ai_thinking: false,
            ai,
            rng,
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.ai_thinking
    }

    fn ai_controls(&self, color: Color) -> bool {
        self.config.opponent == Opponent::Ai && color == Color::Black
    }

    /// Handles a click on `square` by the human player.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if !self.game.status.status.is_playable()
            || self.ai_thinking
            || self.ai_controls(self.game.side_to_move())
        {
            return ClickOutcome::Ignored;
        }

        let side = self.game.side_to_move();
        let own_piece = matches!(self.game.board().get(square), Some(piece) if piece.color == side);

        let Some(from) = self.selected else {
            if own_piece {
                self.selected = Some(square);
                return ClickOutcome::Selected(square);
            }
            return ClickOutcome::Rejected;
        };

        if from == square {
            self.selected = None;
            return ClickOutcome::Deselected;
        }
        if own_piece {
            self.selected = Some(square);
            return ClickOutcome::Selected(square);
        }
        if !self.game.legal_destinations(from).contains(&square) {
            return ClickOutcome::Rejected;
        }

        let mv = ChessMove::new(from, square);
        match self.game.play_move(mv) {
            Ok(next) => {
                self.game = next;
                self.selected = None;
                ClickOutcome::Moved(mv)
            }
            Err(err) => {
                warn!(%mv, %err, "highlighted move was refused");
                ClickOutcome::Rejected
            }
        }
    }

    /// Legal destinations of the selected piece.
    pub fn highlighted_moves(&self) -> Vec<Square> {
        self.selected
            .map(|square| self.game.legal_destinations(square))
            .unwrap_or_default()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.ai_controls(self.game.side_to_move())
            && self.game.status.status.is_playable()
            && !self.ai_thinking
    }

    /// Raises the thinking flag if the AI is due to move.
    pub fn begin_ai_turn(&mut self) -> bool {
        if !self.is_ai_turn() {
            return false;
        }
        self.ai_thinking = true;
        self.selected = None;
        true
    }

    /// Runs AI selection once and commits the result.
    pub fn play_ai_turn(&mut self) -> AiTurnOutcome {
        let due =
            self.ai_controls(self.game.side_to_move()) && self.game.status.status.is_playable();
        if !due {
            self.ai_thinking = false;
            return AiTurnOutcome::NotAiTurn;
        }
        self.ai_thinking = true;

        let params = SearchParams {
            time_budget: self.config.time_budget,
        };
        let outcome = match self.ai.select_move(&self.game.position, &params) {
            Ok(mv) => match self.game.play_move(mv) {
                Ok(next) => {
                    self.game = next;
                    AiTurnOutcome::Moved(mv)
                }
                Err(err) => {
                    error!(%mv, %err, "AI move could not be applied");
                    self.game = self.game.with_error(AI_FAILURE_MESSAGE);
                    AiTurnOutcome::Failed
                }
            },
            Err(ChessError::NoLegalMoves(color)) => {
                debug!(%color, "AI has no legal moves, re-classifying");
                self.game = self.game.reclassified();
                AiTurnOutcome::Finished
            }
            Err(err) => {
                error!(%err, "AI move selection failed");
                self.game = self.game.with_error(AI_FAILURE_MESSAGE);
                AiTurnOutcome::Failed
            }
        };

        self.ai_thinking = false;
        outcome
    }

    /// Banner text for the current state.
    pub fn status_message(&self) -> String {
        let status = &self.game.status;
        if status.status == GameStatus::Active && self.ai_controls(self.game.side_to_move()) {
            return format!("{}{AI_THINKING_SUFFIX}", status.message);
        }
        status.message.clone()
    }

    /// Starts a fresh game with the current configuration.
    pub fn reset(&mut self) -> ChessResult<()> {
        let game = GameState::new_game(self.config.mode, &mut self.rng)?;
        self.game = game;
        self.selected = None;
        self.ai_thinking = false;
        info!(mode = %self.config.mode, opponent = %self.config.opponent, "game reset");
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GameMode) -> ChessResult<()> {
        self.config.mode = mode;
        self.reset()
    }

    pub fn set_opponent(&mut self, opponent: Opponent) -> ChessResult<()> {
        self.config.opponent = opponent;
        self.reset()
    }

    /// Takes effect from the next AI move; the game continues.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.ai.set_difficulty(difficulty);
    }
}

#[cfg(test)]
mod tests {
    use super::{AiTurnOutcome, ClickOutcome, GameSession, Opponent, SessionConfig};
    use crate::engines::engine_trait::Difficulty;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::game_state::game_status::{GameStatus, StatusReport};

    fn seeded(opponent: Opponent, difficulty: Difficulty) -> SessionConfig {
        SessionConfig {
            opponent,
            difficulty,
            seed: Some(42),
            ..SessionConfig::default()
        }
    }

    fn session(opponent: Opponent) -> GameSession {
        GameSession::new(seeded(opponent, Difficulty::Easy)).expect("standard setup should succeed")
    }

    #[test]
    fn select_then_move_a_pawn() {
        let mut s = session(Opponent::Ai);
        assert_eq!(s.status_message(), "White to move");

        let e2 = Square::new(6, 4);
        let e4 = Square::new(4, 4);
        assert_eq!(s.click(e2), ClickOutcome::Selected(e2));
        let mut highlights = s.highlighted_moves();
        highlights.sort();
        assert_eq!(highlights, vec![e4, Square::new(5, 4)]);

        assert_eq!(s.click(e4), ClickOutcome::Moved(ChessMove::new(e2, e4)));
        assert_eq!(s.selected(), None);
        assert_eq!(s.game().side_to_move(), Color::Black);
        assert_eq!(s.status_message(), "Black to move (AI thinking...)");
        assert!(s.is_ai_turn());
    }

    #[test]
    fn clicks_are_ignored_while_the_ai_is_due() {
        let mut s = session(Opponent::Ai);
        s.click(Square::new(6, 4));
        s.click(Square::new(4, 4));
        assert_eq!(s.click(Square::new(1, 4)), ClickOutcome::Ignored);

        assert!(s.begin_ai_turn());
        assert!(s.is_thinking());
        assert!(!s.is_ai_turn());
        assert_eq!(s.click(Square::new(6, 3)), ClickOutcome::Ignored);

        let outcome = s.play_ai_turn();
        assert!(matches!(outcome, AiTurnOutcome::Moved(_)), "got {outcome:?}");
        assert!(!s.is_thinking());
        assert_eq!(s.game().side_to_move(), Color::White);
        assert_eq!(s.game().history.len(), 2);
    }

    #[test]
    fn selection_can_switch_and_clear() {
        let mut s = session(Opponent::Ai);
        let e2 = Square::new(6, 4);
        let g1 = Square::new(7, 6);
        assert_eq!(s.click(e2), ClickOutcome::Selected(e2));
        assert_eq!(s.click(g1), ClickOutcome::Selected(g1));
        assert_eq!(s.highlighted_moves().len(), 2);
        assert_eq!(s.click(g1), ClickOutcome::Deselected);
        assert!(s.highlighted_moves().is_empty());
    }

    #[test]
    fn bad_targets_change_nothing() {
        let mut s = session(Opponent::Ai);
        let before = s.game().clone();
        assert_eq!(s.click(Square::new(4, 4)), ClickOutcome::Rejected);
        assert_eq!(s.click(Square::new(1, 0)), ClickOutcome::Rejected);

        s.click(Square::new(6, 4));
        assert_eq!(s.click(Square::new(3, 4)), ClickOutcome::Rejected);
        assert_eq!(s.selected(), Some(Square::new(6, 4)));
        assert_eq!(*s.game(), before);
    }

    #[test]
    fn human_opponent_moves_black_by_clicking() {
        let mut s = session(Opponent::Human);
        s.click(Square::new(6, 4));
        s.click(Square::new(4, 4));
        assert!(!s.is_ai_turn());
        assert_eq!(s.status_message(), "Black to move");
        assert_eq!(s.click(Square::new(1, 4)), ClickOutcome::Selected(Square::new(1, 4)));
        assert!(matches!(s.click(Square::new(3, 4)), ClickOutcome::Moved(_)));
        assert_eq!(s.game().side_to_move(), Color::White);
    }

    #[test]
    fn stale_status_without_moves_is_reclassified() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b").expect("FEN should parse");
        assert_eq!(game.status.status, GameStatus::Stalemate);
        game.status = StatusReport {
            status: GameStatus::Active,
            message: "Black to move".to_owned(),
        };

        let mut s = GameSession::from_game(seeded(Opponent::Ai, Difficulty::Hard), game);
        assert_eq!(s.play_ai_turn(), AiTurnOutcome::Finished);
        assert_eq!(s.game().status.status, GameStatus::Stalemate);
        assert_eq!(s.status_message(), "Stalemate! Draw.");
    }

    #[test]
    fn error_state_blocks_play_until_reset() {
        let game = GameState::from_fen(crate::game_state::chess_rules::STARTING_POSITION_FEN)
            .expect("FEN should parse")
            .with_error(super::AI_FAILURE_MESSAGE);
        let mut s = GameSession::from_game(seeded(Opponent::Ai, Difficulty::Easy), game);

        assert_eq!(s.click(Square::new(6, 4)), ClickOutcome::Ignored);
        assert_eq!(s.play_ai_turn(), AiTurnOutcome::NotAiTurn);
        assert_eq!(s.status_message(), super::AI_FAILURE_MESSAGE);

        s.reset().expect("reset should succeed");
        assert_eq!(s.game().status.status, GameStatus::Active);
        assert_eq!(s.click(Square::new(6, 4)), ClickOutcome::Selected(Square::new(6, 4)));
    }

    #[test]
    fn difficulty_changes_keep_the_game_but_mode_changes_restart_it() {
        let mut s = session(Opponent::Human);
        s.click(Square::new(6, 4));
        s.click(Square::new(4, 4));

        s.set_difficulty(Difficulty::Hard);
        assert_eq!(s.game().history.len(), 1);
        assert_eq!(s.config().difficulty, Difficulty::Hard);

        s.set_mode(GameMode::RandomDifferent).expect("random setup should succeed");
        assert!(s.game().history.is_empty());
        assert_eq!(s.game().mode, GameMode::RandomDifferent);
        assert_eq!(s.game().side_to_move(), Color::White);

        s.set_opponent(Opponent::Ai).expect("setup should succeed");
        assert_eq!(s.config().opponent, Opponent::Ai);
        assert!(s.game().history.is_empty());
    }

    #[test]
    fn opponent_parses_from_text() {
        assert_eq!("AI".parse::<Opponent>().expect("should parse"), Opponent::Ai);
        assert_eq!("human".parse::<Opponent>().expect("should parse"), Opponent::Human);
        assert!("robot".parse::<Opponent>().is_err());
    }
}
