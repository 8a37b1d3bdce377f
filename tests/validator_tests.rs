//! Validator integration tests built around the game rule scenarios.

use set_engine::{
    is_set, is_set3, Card, Color, Count, EngineError, FillStyle, SelectionFault, Shape,
};

fn card(color: Color, shape: Shape, style: FillStyle, count: Count) -> Card {
    Card::new(color, style, shape, count)
}

// =============================================================================
// Rule Scenarios
// =============================================================================

#[test]
fn test_color_different_rest_same_or_different_is_a_set() {
    // (red,diamond,solid,1), (green,diamond,solid,2), (purple,diamond,solid,3):
    // color all-different, shape all-same, style all-same, count all-different.
    let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
    let b = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Two);
    let c = card(Color::Purple, Shape::Diamond, FillStyle::Solid, Count::Three);

    assert_eq!(is_set(&[a, b, c]), Ok(true));
}

#[test]
fn test_two_red_one_green_is_not_a_set() {
    // (red,diamond,solid,1), (red,diamond,solid,2), (green,diamond,solid,3):
    // color fails with exactly two equal values.
    let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
    let b = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::Two);
    let c = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Three);

    assert_eq!(is_set(&[a, b, c]), Ok(false));
}

#[test]
fn test_all_same_except_one_dimension_all_different() {
    let a = card(Color::Red, Shape::Oval, FillStyle::Striped, Count::Two);
    let b = card(Color::Red, Shape::Oval, FillStyle::Striped, Count::One);
    let c = card(Color::Red, Shape::Oval, FillStyle::Striped, Count::Three);

    assert!(is_set3(a, b, c));
}

#[test]
fn test_each_dimension_can_be_the_failing_one() {
    let base = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);

    // For each dimension, build a triple where only that dimension has
    // exactly two equal values.
    let color_fails = [
        base,
        card(Color::Red, Shape::Oval, FillStyle::Outline, Count::Two),
        card(Color::Green, Shape::Squiggle, FillStyle::Striped, Count::Three),
    ];
    let shape_fails = [
        base,
        card(Color::Green, Shape::Diamond, FillStyle::Outline, Count::Two),
        card(Color::Purple, Shape::Oval, FillStyle::Striped, Count::Three),
    ];
    let style_fails = [
        base,
        card(Color::Green, Shape::Oval, FillStyle::Solid, Count::Two),
        card(Color::Purple, Shape::Squiggle, FillStyle::Outline, Count::Three),
    ];
    let count_fails = [
        base,
        card(Color::Green, Shape::Oval, FillStyle::Outline, Count::One),
        card(Color::Purple, Shape::Squiggle, FillStyle::Striped, Count::Two),
    ];

    for triple in [color_fails, shape_fails, style_fails, count_fails] {
        assert_eq!(is_set(&triple), Ok(false));
    }
}

// =============================================================================
// Input Preconditions
// =============================================================================

#[test]
fn test_selection_must_have_three_cards() {
    let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);

    for bad in [0usize, 1, 2, 4, 5] {
        let cards: Vec<Card> = std::iter::repeat(a).take(bad).collect();
        assert_eq!(
            is_set(&cards),
            Err(EngineError::InvalidSelection(SelectionFault::WrongArity {
                actual: bad
            }))
        );
    }
}

#[test]
fn test_selection_must_be_distinct() {
    let a = card(Color::Red, Shape::Diamond, FillStyle::Solid, Count::One);
    let b = card(Color::Green, Shape::Diamond, FillStyle::Solid, Count::Two);

    assert_eq!(
        is_set(&[a, b, a]),
        Err(EngineError::InvalidSelection(SelectionFault::DuplicateCard))
    );
}
