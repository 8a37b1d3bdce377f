//! Round configuration types.
//!
//! The presentation layer configures a round at startup by providing:
//! - `Difficulty`: easy (fill style pinned to solid) or standard
//! - `RoundConfig`: board size and round length
//!
//! The engine never reads UI state - callers pass configuration in.

use serde::{Deserialize, Serialize};

use crate::generator::Constraint;

/// Default number of cards on the board.
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// Default round length in seconds.
pub const DEFAULT_ROUND_SECS: u32 = 60;

/// Game difficulty.
///
/// Easy mode shrinks the combination space from 81 to 27 by pinning the
/// fill style of every generated card to solid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Fill style pinned to solid.
    Easy,
    /// All four dimensions drawn freely.
    #[default]
    Standard,
}

impl Difficulty {
    /// Build a difficulty from the presentation layer's easy/standard flag.
    #[must_use]
    pub const fn from_easy_flag(is_easy: bool) -> Self {
        if is_easy {
            Difficulty::Easy
        } else {
            Difficulty::Standard
        }
    }

    /// Check if this is easy mode.
    #[must_use]
    pub const fn is_easy(self) -> bool {
        matches!(self, Difficulty::Easy)
    }

    /// The generation constraint this difficulty imposes, if any.
    #[must_use]
    pub fn constraint(self) -> Option<Constraint> {
        match self {
            Difficulty::Easy => Some(Constraint::easy_mode()),
            Difficulty::Standard => None,
        }
    }
}

/// Complete round configuration.
///
/// The presentation layer provides this when starting a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of cards kept on the board.
    pub board_size: usize,

    /// Difficulty mode.
    pub difficulty: Difficulty,

    /// Round length in seconds.
    pub round_secs: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::Standard,
            round_secs: DEFAULT_ROUND_SECS,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with default board size and round length.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        assert!(board_size > 0, "Board must hold at least 1 card");
        self.board_size = board_size;
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the round length in seconds.
    #[must_use]
    pub fn with_round_secs(mut self, round_secs: u32) -> Self {
        assert!(round_secs > 0, "Round must last at least 1 second");
        self.round_secs = round_secs;
        self
    }
}
