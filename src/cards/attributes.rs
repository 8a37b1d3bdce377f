//! The card attribute space: four dimensions, three values each.
//!
//! Every card carries exactly one value per dimension, giving an 81-card
//! combinatorial space (3^4). The canonical dimension order is Color,
//! Fill-Style, Shape, Count - it is fixed and used everywhere signatures
//! are built and compared.
//!
//! ## Value Ordering
//!
//! Declaration order of each value enum is the ordered value sequence for
//! its dimension. "First listed value" (e.g. for the easy-mode pin) always
//! means index 0 of `ALL`.

use serde::{Deserialize, Serialize};

/// Number of attribute dimensions on a card.
pub const DIMENSION_COUNT: usize = 4;

/// Number of values per dimension.
pub const VALUES_PER_DIMENSION: usize = 3;

/// One of the four attribute axes of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Card color.
    Color,
    /// How shapes are filled in.
    FillStyle,
    /// The shape drawn on the card.
    Shape,
    /// How many shapes appear.
    Count,
}

impl Dimension {
    /// All dimensions in canonical order.
    ///
    /// This order is load-bearing: signatures list their values in it,
    /// and the validator walks it when checking a selection.
    pub const CANONICAL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Color,
        Dimension::FillStyle,
        Dimension::Shape,
        Dimension::Count,
    ];

    /// The ordered value sequence for this dimension.
    ///
    /// Returns the same sequence on every call.
    #[must_use]
    pub fn values(self) -> [AttributeValue; VALUES_PER_DIMENSION] {
        match self {
            Dimension::Color => Color::ALL.map(AttributeValue::Color),
            Dimension::FillStyle => FillStyle::ALL.map(AttributeValue::FillStyle),
            Dimension::Shape => Shape::ALL.map(AttributeValue::Shape),
            Dimension::Count => Count::ALL.map(AttributeValue::Count),
        }
    }

    /// Human-readable dimension name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Color => "color",
            Dimension::FillStyle => "fill-style",
            Dimension::Shape => "shape",
            Dimension::Count => "count",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    /// All colors in dimension order.
    pub const ALL: [Color; VALUES_PER_DIMENSION] = [Color::Red, Color::Green, Color::Purple];

    /// Position of this value within the dimension (0..3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

/// How the shapes on a card are filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillStyle {
    Solid,
    Outline,
    Striped,
}

impl FillStyle {
    /// All fill styles in dimension order. `Solid` is the easy-mode pin.
    pub const ALL: [FillStyle; VALUES_PER_DIMENSION] =
        [FillStyle::Solid, FillStyle::Outline, FillStyle::Striped];

    /// Position of this value within the dimension (0..3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FillStyle::Solid => "solid",
            FillStyle::Outline => "outline",
            FillStyle::Striped => "striped",
        }
    }
}

/// The shape drawn on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Oval,
    Squiggle,
}

impl Shape {
    /// All shapes in dimension order.
    pub const ALL: [Shape; VALUES_PER_DIMENSION] =
        [Shape::Diamond, Shape::Oval, Shape::Squiggle];

    /// Position of this value within the dimension (0..3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Oval => "oval",
            Shape::Squiggle => "squiggle",
        }
    }
}

/// How many shapes appear on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// All counts in dimension order.
    pub const ALL: [Count; VALUES_PER_DIMENSION] = [Count::One, Count::Two, Count::Three];

    /// Position of this value within the dimension (0..3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Number of shapes to render (1..=3).
    #[must_use]
    pub const fn pips(self) -> u8 {
        self as u8 + 1
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Count::One => "1",
            Count::Two => "2",
            Count::Three => "3",
        }
    }
}

/// A value from any of the four dimensions.
///
/// Lets generator and validator code treat dimensions uniformly while the
/// underlying values stay strongly typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    Color(Color),
    FillStyle(FillStyle),
    Shape(Shape),
    Count(Count),
}

impl AttributeValue {
    /// The dimension this value belongs to.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            AttributeValue::Color(_) => Dimension::Color,
            AttributeValue::FillStyle(_) => Dimension::FillStyle,
            AttributeValue::Shape(_) => Dimension::Shape,
            AttributeValue::Count(_) => Dimension::Count,
        }
    }

    /// Position of this value within its dimension (0..3).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            AttributeValue::Color(v) => v.index(),
            AttributeValue::FillStyle(v) => v.index(),
            AttributeValue::Shape(v) => v.index(),
            AttributeValue::Count(v) => v.index(),
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AttributeValue::Color(v) => v.label(),
            AttributeValue::FillStyle(v) => v.label(),
            AttributeValue::Shape(v) => v.label(),
            AttributeValue::Count(v) => v.label(),
        }
    }

    /// Get as a color if this value is from the Color dimension.
    #[must_use]
    pub const fn as_color(self) -> Option<Color> {
        match self {
            AttributeValue::Color(v) => Some(v),
            _ => None,
        }
    }

    /// Get as a fill style if this value is from the Fill-Style dimension.
    #[must_use]
    pub const fn as_fill_style(self) -> Option<FillStyle> {
        match self {
            AttributeValue::FillStyle(v) => Some(v),
            _ => None,
        }
    }

    /// Get as a shape if this value is from the Shape dimension.
    #[must_use]
    pub const fn as_shape(self) -> Option<Shape> {
        match self {
            AttributeValue::Shape(v) => Some(v),
            _ => None,
        }
    }

    /// Get as a count if this value is from the Count dimension.
    #[must_use]
    pub const fn as_count(self) -> Option<Count> {
        match self {
            AttributeValue::Count(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Convenient From implementations
impl From<Color> for AttributeValue {
    fn from(v: Color) -> Self {
        AttributeValue::Color(v)
    }
}

impl From<FillStyle> for AttributeValue {
    fn from(v: FillStyle) -> Self {
        AttributeValue::FillStyle(v)
    }
}

impl From<Shape> for AttributeValue {
    fn from(v: Shape) -> Self {
        AttributeValue::Shape(v)
    }
}

impl From<Count> for AttributeValue {
    fn from(v: Count) -> Self {
        AttributeValue::Count(v)
    }
}
