//! Error types for digit decoding, hostnames and tokens.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Broad classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum ErrorKind {
  /// Argument was outside of acceptable range.
  Domain = 1,
  /// Textual or bit-level input was malformed.
  Format = 2,
}

/// Errors produced by the codec. Every operation is pure, so retrying with the
/// same input reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
  /// Resolution argument was outside 1..=15.
  #[error("resolution {0} is outside 1..=15")]
  ResDomain(i32),

  /// A digit within the requested resolution held the unused value.
  #[error("digit at resolution {res} is {digit}, expected 0..=6")]
  InvalidDigit { res: i32, digit: u8 },

  /// A raw value could not be converted to a digit.
  #[error("digit value {0} is outside 0..=6")]
  DigitDomain(u8),

  /// The index is not a valid H3 cell.
  #[error("{0:x} is not a valid H3 cell index")]
  InvalidCell(u64),

  /// The token is empty.
  #[error("token is empty")]
  EmptyToken,

  /// The token holds a character outside the base-32 alphabet, or has a length no
  /// base-32 encoding can produce.
  #[error("token is not valid base-32 (at position {position})")]
  InvalidToken { position: usize },

  /// The token decodes to more hex characters than a cell string holds.
  #[error("token decodes to {0} hex characters, more than the 15 a cell index holds")]
  TokenTooLong(usize),

  /// A cell index hex string is malformed.
  #[error("malformed cell index string: {0}")]
  InvalidCellString(String),

  /// A hostname does not follow the `<digits>.<base cell>.h3.hex.camp` layout.
  #[error("malformed cell hostname: {0}")]
  InvalidHostname(String),
}

impl CodecError {
  /// Returns whether this is a range error or a malformed-input error.
  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    match self {
      CodecError::ResDomain(_) => ErrorKind::Domain,
      _ => ErrorKind::Format,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    assert_eq!(CodecError::ResDomain(16).to_string(), "resolution 16 is outside 1..=15");
    assert_eq!(
      CodecError::InvalidDigit { res: 5, digit: 7 }.to_string(),
      "digit at resolution 5 is 7, expected 0..=6"
    );
    assert_eq!(
      CodecError::InvalidCell(0x8009fffffffffff).to_string(),
      "8009fffffffffff is not a valid H3 cell index"
    );
  }

  #[test]
  fn test_error_kind() {
    assert_eq!(CodecError::ResDomain(0).kind(), ErrorKind::Domain);
    assert_eq!(CodecError::InvalidToken { position: 3 }.kind(), ErrorKind::Format);
    assert_eq!(CodecError::EmptyToken.kind(), ErrorKind::Format);
    assert_eq!(CodecError::InvalidHostname("x".into()).kind(), ErrorKind::Format);
  }
}
