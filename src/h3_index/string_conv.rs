// src/h3_index/string_conv.rs

use tracing::debug;

use crate::error::CodecError;
use crate::types::H3Index;

/// Converts a string representation of an H3 index into an `H3Index`.
///
/// # Arguments
/// * `s` - The string representation of an H3 index (hexadecimal, 1-16 digits, either case).
///
/// # Returns
/// `Ok(H3Index)` on success, or `CodecError::InvalidCellString` if parsing fails.
pub fn string_to_h3(s: &str) -> Result<H3Index, CodecError> {
  if s.is_empty() {
    debug!("empty cell index string");
    return Err(CodecError::InvalidCellString("empty string".into()));
  }
  // from_str_radix would otherwise accept a leading '+'
  if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
    debug!(input = s, "cell index string has non-hex characters");
    return Err(CodecError::InvalidCellString(format!("{s:?} contains non-hex characters")));
  }
  u64::from_str_radix(s, 16).map(H3Index).map_err(|_| {
    debug!(input = s, "cell index string overflows 64 bits");
    CodecError::InvalidCellString(format!("{s:?} does not fit in 64 bits"))
  })
}

/// Converts an `H3Index` into its lowercase hex representation, without leading zeros.
#[must_use]
pub fn h3_to_string(h: H3Index) -> String {
  format!("{:x}", h.0)
}

/// Allocating alias of [`h3_to_string`], kept for callers of the C-style name.
#[must_use]
pub fn h3_to_string_alloc(h: H3Index) -> String {
  h3_to_string(h)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_string_to_h3() {
    assert_eq!(string_to_h3("8928308280fffff"), Ok(H3Index(0x8928308280fffff)));
    assert_eq!(string_to_h3("8928308280FFFFF"), Ok(H3Index(0x8928308280fffff)));
    assert_eq!(string_to_h3("0"), Ok(H3Index(0)));
    assert_eq!(string_to_h3("ffffffffffffffff"), Ok(H3Index(0xffffffffffffffff)));

    assert!(matches!(string_to_h3(""), Err(CodecError::InvalidCellString(_))));
    assert!(matches!(string_to_h3("invalid"), Err(CodecError::InvalidCellString(_))));
    assert!(matches!(string_to_h3("+8928308280fffff"), Err(CodecError::InvalidCellString(_))));
    // More than 16 hex digits
    assert!(matches!(
      string_to_h3("10000000000000000"),
      Err(CodecError::InvalidCellString(_))
    ));
  }

  #[test]
  fn test_h3_to_string() {
    assert_eq!(h3_to_string(H3Index(0x8928308280fffff)), "8928308280fffff");
    assert_eq!(h3_to_string(H3Index(0)), "0");
    assert_eq!(h3_to_string_alloc(H3Index(0xffffffffffffffff)), "ffffffffffffffff");
  }
}
