// src/h3_index/inspection.rs

use crate::constants::*;
use crate::types::{Direction, H3Index};

use super::{
  get_base_cell, get_high_bit, get_index_digit, get_mode, get_raw_index_digit, get_reserved_bits, get_resolution,
  leading_non_zero_digit,
};

/// Check that no digit from 1 to `res` holds the unused value 7.
#[inline]
fn has_any_unused_digit_up_to_res(h: H3Index, res: i32) -> bool {
  (1..=res).any(|r| get_index_digit(h, r).is_none())
}

/// Check that all digits *after* `res` are set to the unused value 7.
#[inline]
fn has_all_unused_digits_after_res(h: H3Index, res: i32) -> bool {
  ((res + 1)..=MAX_H3_RES).all(|r| get_raw_index_digit(h, r) == H3_UNUSED_DIGIT)
}

/// Check if the H3 index has a "deleted K subsequence" if it's a pentagon.
/// Pentagon descendants never take the K axis as their first non-zero digit.
fn has_deleted_subsequence(h: H3Index, base_cell: i32) -> bool {
  is_base_cell_pentagon(base_cell) && leading_non_zero_digit(h) == Direction::KAxes
}

/// Return whether or not the indicated base cell is a pentagon.
#[inline]
#[must_use]
pub fn is_base_cell_pentagon(base_cell: i32) -> bool {
  PENTAGON_BASE_CELLS.contains(&base_cell)
}

/// Determines if an H3 cell is a pentagon.
///
/// # Returns
/// `true` if the H3 index is a pentagon, `false` otherwise.
/// Returns `false` for invalid H3 indexes.
pub fn is_pentagon(h: H3Index) -> bool {
  if !is_valid_cell(h) {
    return false;
  }

  // A cell is a pentagon if its base cell is a pentagon AND
  // all of its digits from res 1 up to its own resolution are CENTER_DIGIT (0).
  is_base_cell_pentagon(get_base_cell(h)) && leading_non_zero_digit(h) == Direction::Center
}

/// Returns the base cell number for an H3 cell index.
///
/// This is a direct read of the 7-bit base cell field; the index is not validated,
/// so an invalid index may report a number up to 127.
pub fn get_base_cell_number(h: H3Index) -> i32 {
  get_base_cell(h)
}

/// Validates an H3 cell index.
///
/// # Returns
/// `true` if the H3 index is a valid cell index, `false` otherwise.
pub fn is_valid_cell(h: H3Index) -> bool {
  if get_high_bit(h) != 0 {
    return false;
  }
  if get_mode(h) != H3_CELL_MODE {
    return false;
  }
  if get_reserved_bits(h) != 0 {
    return false;
  }

  // The 4-bit field can still hold 0..=15 only, so no range check is needed on res.
  let res = get_resolution(h);

  let base_cell = get_base_cell(h);
  if base_cell >= NUM_BASE_CELLS {
    return false;
  }

  if has_any_unused_digit_up_to_res(h, res) {
    return false;
  }
  if !has_all_unused_digits_after_res(h, res) {
    return false;
  }
  if has_deleted_subsequence(h, base_cell) {
    return false;
  }

  true
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_valid_cell() {
    assert!(is_valid_cell(H3Index(0x85283473fffffff)));
    assert!(is_valid_cell(H3Index(0x8d28d1a1a59233f)));
    assert!(is_valid_cell(H3Index(0x8009fffffffffff)));

    // Mode 0
    assert!(!is_valid_cell(H3Index(0x05283473fffffff)));
    // Unused digit at res 5 of a res 5 cell
    assert!(!is_valid_cell(H3Index(0x8528347ffffffff)));
    // Used digit past the cell's resolution
    assert!(!is_valid_cell(H3Index(0x85283473ffffff0)));
    // Base cell 127
    assert!(!is_valid_cell(H3Index(0x80fffffffffffff)));
  }

  #[test]
  fn test_deleted_subsequence() {
    // Res 1 child of pentagon base cell 4 in the K direction
    assert!(!is_valid_cell(H3Index(0x81087ffffffffff)));
    // Same child off hexagon base cell 20 is fine
    assert!(is_valid_cell(H3Index(0x81287ffffffffff)));
  }

  #[test]
  fn test_is_pentagon() {
    assert!(is_pentagon(H3Index(0x8009fffffffffff)));
    assert!(!is_pentagon(H3Index(0x85283473fffffff)));
    assert!(!is_pentagon(H3Index(0x05283473fffffff)));
  }

  #[test]
  fn test_is_base_cell_pentagon() {
    assert!(is_base_cell_pentagon(4));
    assert!(is_base_cell_pentagon(117));
    assert!(!is_base_cell_pentagon(20));
    assert!(!is_base_cell_pentagon(-1));
  }
}
