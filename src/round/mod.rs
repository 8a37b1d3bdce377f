//! Round lifecycle: the board, the set counter, and the countdown.
//!
//! `Round` is the single owner of all mutable round state. It fills the
//! board with unique cards at start, routes 3-card selections through the
//! validator, replaces matched cards with fresh unique ones, and drives
//! the countdown through an explicitly owned `RoundTimer` - there is no
//! shared timer handle to leak a stale callback after the round ends.
//!
//! The engine is synchronous: the presentation layer calls `tick()` once
//! per second and renders whatever state the round reports.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Signature};
use crate::core::config::RoundConfig;
use crate::error::{EngineError, SelectionFault};
use crate::generator::CardGenerator;
use crate::validator::{is_set3, SELECTION_SIZE};

/// Countdown timer owned by a `Round`.
///
/// Cancellation is dropping the timer through its owner; nothing else
/// holds a handle to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    remaining_secs: u32,
}

impl RoundTimer {
    fn new(secs: u32) -> Self {
        Self {
            remaining_secs: secs,
        }
    }

    /// Seconds left on the clock.
    #[must_use]
    pub const fn remaining_secs(self) -> u32 {
        self.remaining_secs
    }

    /// Advance one second. Returns `true` when the timer has just expired.
    fn tick(&mut self) -> bool {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs == 0
    }
}

impl std::fmt::Display for RoundTimer {
    /// Clock form, "MM:SS".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }
}

/// What came of a 3-card selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// A valid set: the matched cards were retired and replaced in place.
    Matched {
        /// The freshly generated replacement cards, in board order.
        replacements: SmallVec<[Card; SELECTION_SIZE]>,
    },
    /// The three cards do not form a set. Board unchanged.
    NotASet,
    /// The round already ended; the board is locked.
    RoundOver,
}

/// A single timed round of the game.
///
/// Owns the board, the exclusion set backing uniqueness, the set counter,
/// and the countdown. Core components (`CardGenerator`, the validator)
/// stay pool-free; this is the only place pool state lives.
#[derive(Clone, Debug)]
pub struct Round {
    config: RoundConfig,
    generator: CardGenerator,
    board: Vec<Card>,
    signatures: FxHashSet<Signature>,
    sets_found: u32,
    timer: Option<RoundTimer>,
}

impl Round {
    /// Start a round: deal a full board of unique cards and arm the timer.
    ///
    /// Fails with `ExhaustedSpace` if the configured board does not fit in
    /// the (possibly constrained) combination space.
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, EngineError> {
        let mut generator = CardGenerator::new(seed);
        let (board, signatures) = Self::deal(&mut generator, &config)?;

        Ok(Self {
            timer: Some(RoundTimer::new(config.round_secs)),
            config,
            generator,
            board,
            signatures,
            sets_found: 0,
        })
    }

    fn deal(
        generator: &mut CardGenerator,
        config: &RoundConfig,
    ) -> Result<(Vec<Card>, FxHashSet<Signature>), EngineError> {
        let constraint = config.difficulty.constraint();
        let mut board = Vec::with_capacity(config.board_size);
        let mut signatures = FxHashSet::default();

        for _ in 0..config.board_size {
            let card = generator.generate(&signatures, constraint)?;
            signatures.insert(card.signature());
            board.push(card);
        }

        Ok((board, signatures))
    }

    /// The round configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The active board, in display order.
    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Monotonic count of sets found this round.
    #[must_use]
    pub fn sets_found(&self) -> u32 {
        self.sets_found
    }

    /// The countdown, if the round is still live.
    #[must_use]
    pub fn timer(&self) -> Option<RoundTimer> {
        self.timer
    }

    /// Has the round ended (expired or ended early)?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.timer.is_none()
    }

    /// Resolve a 3-card selection.
    ///
    /// On a match the three cards are retired and replaced by fresh unique
    /// cards in the same board slots, and the set counter advances. On a
    /// non-match the board is untouched. Selections against a finished
    /// round report `RoundOver`.
    ///
    /// Fails with `InvalidSelection` if the picks are not exactly 3
    /// distinct signatures present on the board.
    pub fn select(&mut self, picks: &[Signature]) -> Result<SelectionOutcome, EngineError> {
        if self.is_over() {
            return Ok(SelectionOutcome::RoundOver);
        }

        let [x, y, z] = picks else {
            return Err(EngineError::InvalidSelection(SelectionFault::WrongArity {
                actual: picks.len(),
            }));
        };
        if x == y || y == z || x == z {
            return Err(EngineError::InvalidSelection(SelectionFault::DuplicateCard));
        }

        let slots = [self.slot_of(*x)?, self.slot_of(*y)?, self.slot_of(*z)?];
        let selected = slots.map(|slot| self.board[slot]);

        if !is_set3(selected[0], selected[1], selected[2]) {
            return Ok(SelectionOutcome::NotASet);
        }

        // Generate all replacements against a working set before touching
        // the board, so a (theoretical) exhaustion failure leaves the
        // round intact. Matched cards leave the set first; each fresh card
        // joins it before the next draw, keeping the batch unique.
        let constraint = self.config.difficulty.constraint();
        let mut working = self.signatures.clone();
        for card in selected {
            working.remove(&card.signature());
        }

        let mut replacements: SmallVec<[Card; SELECTION_SIZE]> = SmallVec::new();
        for _ in 0..SELECTION_SIZE {
            let card = self.generator.generate(&working, constraint)?;
            working.insert(card.signature());
            replacements.push(card);
        }

        for (slot, card) in slots.into_iter().zip(replacements.iter()) {
            self.board[slot] = *card;
        }
        self.signatures = working;
        self.sets_found += 1;

        Ok(SelectionOutcome::Matched { replacements })
    }

    fn slot_of(&self, signature: Signature) -> Result<usize, EngineError> {
        self.board
            .iter()
            .position(|card| card.signature() == signature)
            .ok_or(EngineError::InvalidSelection(SelectionFault::NotOnBoard))
    }

    /// Deal a completely new board. The set counter is untouched.
    ///
    /// Has no effect once the round is over.
    pub fn refresh(&mut self) -> Result<(), EngineError> {
        if self.is_over() {
            return Ok(());
        }

        let (board, signatures) = Self::deal(&mut self.generator, &self.config)?;
        self.board = board;
        self.signatures = signatures;
        Ok(())
    }

    /// Advance the countdown one second.
    ///
    /// Returns `true` while the round is still live. On expiry the timer
    /// is cancelled and the board locks; further selections report
    /// `RoundOver`.
    pub fn tick(&mut self) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        if timer.tick() {
            self.timer = None;
            return false;
        }
        true
    }

    /// End the round early (back to menu): cancel the timer, clear the
    /// board, and reset the set counter.
    pub fn end(&mut self) {
        self.timer = None;
        self.board.clear();
        self.signatures.clear();
        self.sets_found = 0;
    }
}
