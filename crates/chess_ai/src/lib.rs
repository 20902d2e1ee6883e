//! Computer opponent for the `chess_core` engine.
//!
//! A [`ChessAi`] is configured with a color and a difficulty tier:
//!
//! - **Easy** plays a uniformly random legal move.
//! - **Medium** scores every legal move with a one-ply heuristic.
//! - **Hard** runs an iterative-deepening alpha-beta search under a
//!   wall-clock budget.
//!
//! Search probes moves on the caller's board in place and restores it
//! before returning. The board is transiently inconsistent while a probe
//! is applied, so the caller must give `get_best_move` exclusive access
//! to the board for the duration of the call — either by not touching it
//! from other threads, or by handing the AI a private clone.

pub mod clock;
pub mod eval;
pub mod search;

use std::fmt;
use std::time::Duration;

use chess_core::{Board, Color, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;

use search::SearchConfig;

/// Wall-clock budget for a single hard-tier search.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty name; unknown names yield `None`.
    pub fn parse(level: &str) -> Option<Difficulty> {
        match level {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Iterative-deepening depth cap for the tree search at this tier.
    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A computer player for one color.
pub struct ChessAi {
    color: Color,
    difficulty: Difficulty,
    rng: StdRng,
}

impl ChessAi {
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        ChessAi {
            color,
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn seeded(color: Color, difficulty: Difficulty, seed: u64) -> Self {
        ChessAi {
            color,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change difficulty by name. Unrecognized levels are ignored and the
    /// current setting kept.
    pub fn set_difficulty(&mut self, level: &str) {
        if let Some(difficulty) = Difficulty::parse(level) {
            self.difficulty = difficulty;
        }
    }

    /// Pick a move for this AI's color, or `None` when no legal move
    /// exists. The board is restored exactly before returning.
    pub fn get_best_move(&mut self, board: &mut Board) -> Option<(Square, Square)> {
        let moves = board.get_all_possible_moves(self.color);
        if moves.is_empty() {
            return None;
        }

        match self.difficulty {
            Difficulty::Easy => search::random_move(&moves, &mut self.rng),
            Difficulty::Medium => {
                search::evaluated_move(board, &moves, self.color, &mut self.rng)
                    .or_else(|| search::random_move(&moves, &mut self.rng))
            }
            Difficulty::Hard => {
                let config = SearchConfig {
                    color: self.color,
                    max_depth: self.difficulty.max_depth(),
                    budget: DEFAULT_TIME_BUDGET,
                };
                search::minimax_move(board, &moves, &config, &mut self.rng)
            }
        }
    }
}
