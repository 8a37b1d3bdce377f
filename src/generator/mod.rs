//! Unique card generation.
//!
//! `CardGenerator` draws one value per dimension uniformly at random and
//! rejects candidates whose signature is already in the caller's exclusion
//! set. The loop is bounded: after a fixed number of collisions it falls
//! back to enumerating the unused combinations directly and picking one
//! uniformly, so a nearly-full (or full) space fails with
//! `EngineError::ExhaustedSpace` instead of spinning.
//!
//! ## Constraints
//!
//! A `Constraint` pins one dimension to a fixed value; that dimension is
//! never drawn. Easy mode pins fill style to solid, shrinking the space
//! from 81 combinations to 27.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{
    AttributeValue, Card, Color, Count, Dimension, FillStyle, Shape, Signature,
    VALUES_PER_DIMENSION,
};
use crate::core::config::Difficulty;
use crate::core::rng::{GameRng, GameRngState};
use crate::error::EngineError;

/// Collisions tolerated before switching to direct enumeration.
///
/// With a 12-card pool in a 27-combination space the collision chance per
/// draw is under one half, so hitting this cap is vanishingly rare outside
/// of adversarial exclusion sets.
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Total number of attribute combinations (3^4).
pub const SPACE_SIZE: usize = VALUES_PER_DIMENSION.pow(4);

/// A generation constraint pinning one dimension to a fixed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    value: AttributeValue,
}

impl Constraint {
    /// Pin the value's dimension to that value.
    #[must_use]
    pub fn pin(value: impl Into<AttributeValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The easy-mode constraint: fill style pinned to solid.
    #[must_use]
    pub fn easy_mode() -> Self {
        Self::pin(FillStyle::Solid)
    }

    /// The pinned dimension.
    #[must_use]
    pub fn dimension(self) -> Dimension {
        self.value.dimension()
    }

    /// The fixed value.
    #[must_use]
    pub const fn value(self) -> AttributeValue {
        self.value
    }

    /// Does this card satisfy the constraint?
    #[must_use]
    pub fn admits(self, card: Card) -> bool {
        card.value(self.dimension()) == self.value
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.dimension(), self.value)
    }
}

/// Generates cards unique by signature against a caller-supplied pool.
///
/// The generator holds only the RNG stream; pools are passed in per call
/// and never stored. The returned card's signature is guaranteed absent
/// from `existing` at the moment of return - the caller inserts it before
/// requesting the next card.
#[derive(Clone, Debug)]
pub struct CardGenerator {
    rng: GameRng,
}

impl CardGenerator {
    /// Create a generator with a fresh seeded RNG stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a generator over an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Capture the RNG state for replay.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Size of the combination space under the given constraint.
    #[must_use]
    pub fn space_size(constraint: Option<Constraint>) -> usize {
        match constraint {
            Some(_) => SPACE_SIZE / VALUES_PER_DIMENSION,
            None => SPACE_SIZE,
        }
    }

    /// Generate a card whose signature is not in `existing`.
    ///
    /// The constrained dimension, if any, is fixed rather than drawn; the
    /// other dimensions are independent uniform draws. Fails with
    /// `ExhaustedSpace` when every combination under the constraint is
    /// already taken.
    pub fn generate(
        &mut self,
        existing: &FxHashSet<Signature>,
        constraint: Option<Constraint>,
    ) -> Result<Card, EngineError> {
        let space_size = Self::space_size(constraint);

        // A pool at least as large as the space can never yield a fresh
        // card by sampling; go straight to enumeration.
        if existing.len() < space_size {
            for _ in 0..MAX_SAMPLE_ATTEMPTS {
                let card = self.draw(constraint);
                if !existing.contains(&card.signature()) {
                    return Ok(card);
                }
            }
        }

        self.pick_from_remainder(existing, constraint)
    }

    /// Generate under a difficulty instead of an explicit constraint.
    ///
    /// Convenience for callers holding the presentation layer's
    /// easy/standard flag; see [`Difficulty::from_easy_flag`].
    pub fn generate_for(
        &mut self,
        existing: &FxHashSet<Signature>,
        difficulty: Difficulty,
    ) -> Result<Card, EngineError> {
        self.generate(existing, difficulty.constraint())
    }

    /// One unconstrained-uniform draw per dimension.
    fn draw(&mut self, constraint: Option<Constraint>) -> Card {
        Card::new(
            self.draw_dimension(Color::ALL, constraint.and_then(|c| c.value().as_color())),
            self.draw_dimension(
                FillStyle::ALL,
                constraint.and_then(|c| c.value().as_fill_style()),
            ),
            self.draw_dimension(Shape::ALL, constraint.and_then(|c| c.value().as_shape())),
            self.draw_dimension(Count::ALL, constraint.and_then(|c| c.value().as_count())),
        )
    }

    fn draw_dimension<T: Copy>(
        &mut self,
        all: [T; VALUES_PER_DIMENSION],
        pinned: Option<T>,
    ) -> T {
        match pinned {
            Some(value) => value,
            None => all[self.rng.gen_range_usize(0..all.len())],
        }
    }

    /// Enumerate the unused combinations under the constraint and pick one
    /// uniformly. The bounded-loop fallback for a nearly-full space.
    fn pick_from_remainder(
        &mut self,
        existing: &FxHashSet<Signature>,
        constraint: Option<Constraint>,
    ) -> Result<Card, EngineError> {
        let mut free = Vec::new();
        for color in Color::ALL {
            for style in FillStyle::ALL {
                for shape in Shape::ALL {
                    for count in Count::ALL {
                        let card = Card::new(color, style, shape, count);
                        if let Some(constraint) = constraint {
                            if !constraint.admits(card) {
                                continue;
                            }
                        }
                        if !existing.contains(&card.signature()) {
                            free.push(card);
                        }
                    }
                }
            }
        }

        self.rng
            .choose(&free)
            .copied()
            .ok_or(EngineError::ExhaustedSpace {
                space_size: Self::space_size(constraint),
            })
    }
}
