//! Card system: the attribute space, cards, and signatures.
//!
//! ## Key Types
//!
//! - `Dimension`: the four attribute axes, in canonical order
//! - `Color` / `FillStyle` / `Shape` / `Count`: per-dimension value enums
//! - `AttributeValue`: dimension-agnostic view of a value
//! - `Card`: immutable 4-tuple, one value per dimension
//! - `Signature`: by-value composite identity for uniqueness checks

pub mod attributes;
pub mod card;

pub use attributes::{
    AttributeValue, Color, Count, Dimension, FillStyle, Shape, DIMENSION_COUNT,
    VALUES_PER_DIMENSION,
};
pub use card::{Card, Signature};
