//! # set-engine
//!
//! Card generation and set-validation engine for a Set-style puzzle game.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: The generator and validator never store pool state.
//!    Pools are passed in by the caller; operations succeed or fail
//!    atomically with no partial results.
//!
//! 2. **Identity by value**: A card's `Signature` is a structured key
//!    compared by value. The dashed textual form ("red-solid-diamond-1")
//!    is display-only, never parsed.
//!
//! 3. **Bounded generation**: Unique-card generation is rejection
//!    sampling with an attempt cap and a direct-enumeration fallback, so
//!    an exhausted attribute space reports `ExhaustedSpace` rather than
//!    looping forever.
//!
//! 4. **Explicit ownership**: The round timer is a value owned by the
//!    `Round`, cancelled through its owner - no shared mutable handle.
//!
//! ## Modules
//!
//! - `cards`: the attribute space, cards, and signatures
//! - `core`: deterministic RNG and round configuration
//! - `generator`: unique card generation with optional constraints
//! - `validator`: the per-dimension set rule
//! - `round`: board ownership, selections, counter, and countdown
//! - `error`: precondition failures (`InvalidSelection`, `ExhaustedSpace`)

pub mod cards;
pub mod core;
pub mod error;
pub mod generator;
pub mod round;
pub mod validator;

// Re-export commonly used types
pub use crate::cards::{
    AttributeValue, Card, Color, Count, Dimension, FillStyle, Shape, Signature,
};

pub use crate::core::{Difficulty, GameRng, GameRngState, RoundConfig};

pub use crate::error::{EngineError, SelectionFault};

pub use crate::generator::{CardGenerator, Constraint, SPACE_SIZE};

pub use crate::round::{Round, RoundTimer, SelectionOutcome};

pub use crate::validator::{is_set, is_set3, SELECTION_SIZE};
