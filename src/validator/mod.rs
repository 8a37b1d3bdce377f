//! Set validation.
//!
//! Three cards form a set iff, for each of the four dimensions
//! independently, their values at that dimension are either all equal or
//! all distinct. A dimension with exactly two equal values fails, and one
//! failing dimension fails the whole selection.
//!
//! Validation is a pure function of its input: no randomness, no side
//! effects, and the result is invariant under permutation of the cards.

use crate::cards::{AttributeValue, Card, Dimension};
use crate::error::{EngineError, SelectionFault};

/// Number of cards in a selection.
pub const SELECTION_SIZE: usize = 3;

/// Check whether a selection of cards forms a valid set.
///
/// Fails fast with `InvalidSelection` if the slice does not contain
/// exactly 3 distinct cards. Use [`is_set3`] when the caller already
/// holds exactly three distinct cards.
pub fn is_set(cards: &[Card]) -> Result<bool, EngineError> {
    let [a, b, c] = cards else {
        return Err(EngineError::InvalidSelection(SelectionFault::WrongArity {
            actual: cards.len(),
        }));
    };

    // A selection is 3 *distinct* cards; (x, x, x) is vacuously "all
    // same" per dimension but is a caller error, not a set.
    if a == b || b == c || a == c {
        return Err(EngineError::InvalidSelection(SelectionFault::DuplicateCard));
    }

    Ok(is_set3(*a, *b, *c))
}

/// Check whether three distinct cards form a valid set.
///
/// Evaluated per dimension, not per card; symmetric under permutation.
#[must_use]
pub fn is_set3(a: Card, b: Card, c: Card) -> bool {
    Dimension::CANONICAL
        .into_iter()
        .all(|dimension| dimension_passes(a.value(dimension), b.value(dimension), c.value(dimension)))
}

/// A dimension passes iff its three values are all equal or all distinct.
/// Exactly two equal is the discriminating failure case.
fn dimension_passes(a: AttributeValue, b: AttributeValue, c: AttributeValue) -> bool {
    let all_same = a == b && b == c;
    let all_distinct = a != b && b != c && a != c;
    all_same || all_distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Count, FillStyle, Shape};

    fn card(color: Color, shape: Shape, style: FillStyle, count: Count) -> Card {
        Card::new(color, style, shape, count)
    }

    #[test]
    fn test_valid_set_mixed_dimensions() {
        // Color all different, shape all same, style all same, count all
        // different.
        let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
        let b = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Two);
        let c = card(Color::Purple, Shape::Diamond, FillStyle::Solid, Count::Three);

        assert!(is_set3(a, b, c));
        assert_eq!(is_set(&[a, b, c]), Ok(true));
    }

    #[test]
    fn test_two_equal_one_different_fails() {
        // Color fails: two red, one green.
        let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
        let b = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::Two);
        let c = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Three);

        assert!(!is_set3(a, b, c));
        assert_eq!(is_set(&[a, b, c]), Ok(false));
    }

    #[test]
    fn test_all_dimensions_distinct() {
        let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
        let b = card(Color::Green, Shape::Oval, FillStyle::Outline, Count::Two);
        let c = card(Color::Purple, Shape::Squiggle, FillStyle::Striped, Count::Three);

        assert!(is_set3(a, b, c));
    }

    #[test]
    fn test_single_failing_dimension_fails_whole_set() {
        // Only count fails (two One, one Two); everything else passes.
        let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
        let b = card(Color::Green, Shape::Oval, FillStyle::Outline, Count::One);
        let c = card(Color::Purple, Shape::Squiggle, FillStyle::Striped, Count::Two);

        assert!(!is_set3(a, b, c));
    }

    #[test]
    fn test_permutation_invariance() {
        let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
        let b = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Two);
        let c = card(Color::Purple, Shape::Diamond, FillStyle::Solid, Count::Three);

        let expected = is_set3(a, b, c);
        for perm in [
            [a, b, c],
            [a, c, b],
            [b, a, c],
            [b, c, a],
            [c, a, b],
            [c, b, a],
        ] {
            assert_eq!(is_set3(perm[0], perm[1], perm[2]), expected);
        }
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
        let b = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Two);

        assert_eq!(
            is_set(&[a, b]),
            Err(EngineError::InvalidSelection(SelectionFault::WrongArity {
                actual: 2
            }))
        );
        assert_eq!(
            is_set(&[a, b, a, b]),
            Err(EngineError::InvalidSelection(SelectionFault::WrongArity {
                actual: 4
            }))
        );
        assert_eq!(
            is_set(&[]),
            Err(EngineError::InvalidSelection(SelectionFault::WrongArity {
                actual: 0
            }))
        );
    }

    #[test]
    fn test_duplicate_cards_rejected() {
        let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
        let b = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Two);

        assert_eq!(
            is_set(&[a, a, b]),
            Err(EngineError::InvalidSelection(SelectionFault::DuplicateCard))
        );
        assert_eq!(
            is_set(&[a, a, a]),
            Err(EngineError::InvalidSelection(SelectionFault::DuplicateCard))
        );
    }
}
