//! Engine abstraction layer.
//!
//! Defines the search input parameters and the output payload so the
//! difficulty levels can be selected at runtime behind a single trait.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::AI_TIME_BUDGET;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::InvalidOption {
                name: "difficulty",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Soft ceiling, checked between root candidates only.
    pub time_budget: Duration,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            time_budget: AI_TIME_BUDGET,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the side to move in `position`. `best_move` is `None`
    /// only when the engine found nothing to play.
    fn choose_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput>;
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, SearchParams};
    use std::time::Duration;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>().expect("should parse"), Difficulty::Hard);
        assert_eq!(" easy ".parse::<Difficulty>().expect("should parse"), Difficulty::Easy);
        assert!("expert".parse::<Difficulty>().is_err());
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty.to_string().parse::<Difficulty>().expect("display should round trip"),
                difficulty
            );
        }
    }

    #[test]
    fn default_budget_is_five_seconds() {
        assert_eq!(SearchParams::default().time_budget, Duration::from_secs(5));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
