//! Core H3 data structures.

use std::fmt;

use crate::error::CodecError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents an H3 cell index.
/// This is a 64-bit unsigned integer.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// Invalid H3 index, often used to signify an error or missing data.
pub const H3_NULL: H3Index = H3Index(0);

/// An H3 index held as two 32-bit words, `upper` carrying the high-order half.
///
/// This is the form the digit decoder works on. Conversions to and from
/// [`H3Index`] are lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitIndex {
  /// Bits 32-63 of the index.
  pub upper: u32,
  /// Bits 0-31 of the index.
  pub lower: u32,
}

impl SplitIndex {
  /// Creates a split index from its two words.
  #[must_use]
  pub const fn new(upper: u32, lower: u32) -> Self {
    Self { upper, lower }
  }
}

impl From<H3Index> for SplitIndex {
  fn from(h: H3Index) -> Self {
    Self {
      upper: (h.0 >> 32) as u32,
      lower: h.0 as u32,
    }
  }
}

impl From<SplitIndex> for H3Index {
  fn from(split: SplitIndex) -> Self {
    H3Index((u64::from(split.upper) << 32) | u64::from(split.lower))
  }
}

/// H3 digit representing IJK+ axes direction (0-6).
///
/// The raw value 7 marks an unused resolution level and has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// H3 digit in center.
  #[default]
  Center = 0,
  /// H3 digit in k-axes direction.
  KAxes = 1,
  /// H3 digit in j-axes direction.
  JAxes = 2,
  /// H3 digit in j == k direction.
  JkAxes = 3, // J_AXES_DIGIT | K_AXES_DIGIT
  /// H3 digit in i-axes direction.
  IAxes = 4,
  /// H3 digit in i == k direction.
  IkAxes = 5, // I_AXES_DIGIT | K_AXES_DIGIT
  /// H3 digit in i == j direction.
  IjAxes = 6, // I_AXES_DIGIT | J_AXES_DIGIT
}

impl TryFrom<u8> for Direction {
  type Error = CodecError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Direction::Center),
      1 => Ok(Direction::KAxes),
      2 => Ok(Direction::JAxes),
      3 => Ok(Direction::JkAxes),
      4 => Ok(Direction::IAxes),
      5 => Ok(Direction::IkAxes),
      6 => Ok(Direction::IjAxes),
      _ => Err(CodecError::DigitDomain(value)),
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", *self as u8)
  }
}
