//! Cards and their signatures.
//!
//! A `Card` is an immutable 4-tuple, one typed value per dimension. Its
//! `Signature` is the canonical composite identity used for uniqueness
//! checks: a by-value key, not a parsed string. The dashed textual form
//! ("red-solid-diamond-1") exists for display only, via `Display`.

use serde::{Deserialize, Serialize};

use super::attributes::{
    AttributeValue, Color, Count, Dimension, FillStyle, Shape, DIMENSION_COUNT,
};

/// An immutable Set card: one value per attribute dimension.
///
/// Cards are never mutated after creation; replacing a matched card means
/// generating a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card color.
    pub color: Color,
    /// Fill style of the shapes.
    pub style: FillStyle,
    /// Shape drawn on the card.
    pub shape: Shape,
    /// Number of shapes.
    pub count: Count,
}

impl Card {
    /// Create a card from its four attribute values.
    #[must_use]
    pub const fn new(color: Color, style: FillStyle, shape: Shape, count: Count) -> Self {
        Self {
            color,
            style,
            shape,
            count,
        }
    }

    /// The card's value at the given dimension.
    #[must_use]
    pub fn value(self, dimension: Dimension) -> AttributeValue {
        match dimension {
            Dimension::Color => self.color.into(),
            Dimension::FillStyle => self.style.into(),
            Dimension::Shape => self.shape.into(),
            Dimension::Count => self.count.into(),
        }
    }

    /// All four values in canonical dimension order.
    #[must_use]
    pub fn values(self) -> [AttributeValue; DIMENSION_COUNT] {
        Dimension::CANONICAL.map(|dimension| self.value(dimension))
    }

    /// The card's signature - its identity within a pool.
    #[must_use]
    pub fn signature(self) -> Signature {
        Signature(self.values().map(AttributeValue::index))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.signature())
    }
}

/// Canonical composite identity of a card.
///
/// Stores one value index per dimension, in canonical order, and is
/// compared and hashed by value. Two cards are the same card iff their
/// signatures are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature([u8; DIMENSION_COUNT]);

impl Signature {
    /// Raw value indices in canonical dimension order.
    #[must_use]
    pub const fn raw(self) -> [u8; DIMENSION_COUNT] {
        self.0
    }
}

impl std::fmt::Display for Signature {
    /// Order-preserving textual form: the four value labels in canonical
    /// dimension order, joined by `-`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, dimension) in Dimension::CANONICAL.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            f.write_str(dimension.values()[self.0[i] as usize].label())?;
        }
        Ok(())
    }
}
