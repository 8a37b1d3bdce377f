//! Core engine types: RNG and round configuration.
//!
//! These are the game-agnostic building blocks; the presentation layer
//! configures rounds via `RoundConfig` rather than poking at engine state.

pub mod config;
pub mod rng;

pub use config::{Difficulty, RoundConfig, DEFAULT_BOARD_SIZE, DEFAULT_ROUND_SECS};
pub use rng::{GameRng, GameRngState};
