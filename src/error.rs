//! Engine error types.
//!
//! Both core components are pure: every error is a failed precondition
//! reported to the caller, never retried or recovered internally.

use thiserror::Error;

/// Why a selection was rejected before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionFault {
    /// Something other than exactly 3 cards was supplied.
    WrongArity {
        /// How many cards were actually supplied.
        actual: usize,
    },
    /// The same card appears more than once in the selection.
    DuplicateCard,
    /// A selected signature does not match any card on the board.
    NotOnBoard,
}

impl std::fmt::Display for SelectionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionFault::WrongArity { actual } => {
                write!(f, "expected exactly 3 cards, got {actual}")
            }
            SelectionFault::DuplicateCard => write!(f, "selection contains a duplicate card"),
            SelectionFault::NotOnBoard => write!(f, "selected card is not on the board"),
        }
    }
}

/// Errors reported by the generator, validator, and round controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The caller supplied something other than exactly 3 distinct,
    /// on-board cards. Surfaced immediately, never retried.
    #[error("invalid selection: {0}")]
    InvalidSelection(SelectionFault),

    /// No unused attribute combination remains under the current
    /// constraint. The caller may relax the constraint and retry.
    #[error("attribute space exhausted: all {space_size} combinations are in use")]
    ExhaustedSpace {
        /// Size of the (possibly constrained) combination space.
        space_size: usize,
    },
}
