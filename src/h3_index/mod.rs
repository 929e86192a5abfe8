pub mod inspection;
pub mod string_conv;

use crate::constants::*;
use crate::types::{Direction, H3Index};

pub use inspection::{get_base_cell_number, is_base_cell_pentagon, is_pentagon, is_valid_cell};
pub use string_conv::{h3_to_string, h3_to_string_alloc, string_to_h3};

// H3Index bit layout accessors/mutators

/// Gets the mode of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_mode(h: H3Index) -> u8 {
  ((h.0 & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
}

/// Sets the mode of the H3 index.
#[inline(always)]
pub fn set_mode(h: &mut H3Index, mode: u8) {
  h.0 = (h.0 & H3_MODE_MASK_NEGATIVE) | (u64::from(mode) << H3_MODE_OFFSET);
}

/// Gets the resolution of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_resolution(h: H3Index) -> i32 {
  ((h.0 & H3_RES_MASK) >> H3_RES_OFFSET) as i32
}

/// Sets the resolution of the H3 index.
#[inline(always)]
pub fn set_resolution(h: &mut H3Index, res: i32) {
  h.0 = (h.0 & H3_RES_MASK_NEGATIVE) | ((res as u64) << H3_RES_OFFSET);
}

/// Gets the base cell of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_base_cell(h: H3Index) -> i32 {
  ((h.0 & H3_BC_MASK) >> H3_BC_OFFSET) as i32
}

/// Sets the base cell of the H3 index.
#[inline(always)]
pub fn set_base_cell(h: &mut H3Index, bc: i32) {
  h.0 = (h.0 & H3_BC_MASK_NEGATIVE) | ((bc as u64) << H3_BC_OFFSET);
}

/// Gets the raw 3-bit digit at resolution `res` (1-15) from the single 64-bit word.
#[inline(always)]
#[must_use]
pub const fn get_raw_index_digit(h: H3Index, res: i32) -> u8 {
  ((h.0 >> ((MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET as i32)) & H3_DIGIT_MASK) as u8
}

/// Gets the H3 digit at the given resolution `res` from the H3 index.
/// `res` must be between 1 and 15. Returns `None` where the level holds the unused value 7.
#[inline]
#[must_use]
pub fn get_index_digit(h: H3Index, res: i32) -> Option<Direction> {
  Direction::try_from(get_raw_index_digit(h, res)).ok()
}

/// Sets the H3 digit at the given resolution `res` in the H3 index.
/// `res` must be between 1 and 15.
#[inline(always)]
pub fn set_index_digit(h: &mut H3Index, res: i32, digit: Direction) {
  let offset = (MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET as i32;
  h.0 = (h.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset);
}

/// Gets the reserved bits of the H3 index. Should be 0 for valid cell indexes.
#[inline(always)]
#[must_use]
pub const fn get_reserved_bits(h: H3Index) -> u8 {
  ((h.0 & H3_RESERVED_MASK) >> H3_RESERVED_OFFSET) as u8
}

/// Gets the high bit of the H3 index (should be 0).
#[inline(always)]
#[must_use]
pub const fn get_high_bit(h: H3Index) -> u8 {
  ((h.0 & H3_HIGH_BIT_MASK) >> (H3_NUM_BITS - 1)) as u8
}

/// Builds a cell-mode index from a base cell and its digits, coarsest first.
/// The resolution is the number of digits; levels past it are left at 7.
///
/// `digits` must hold at most 15 entries and `base_cell` must fit in 7 bits.
pub(crate) fn cell_from_parts(base_cell: i32, digits: &[Direction]) -> H3Index {
  let mut h = H3Index(H3_INIT);
  set_mode(&mut h, H3_CELL_MODE);
  set_resolution(&mut h, digits.len() as i32);
  set_base_cell(&mut h, base_cell);
  for (r, digit) in (1..).zip(digits) {
    set_index_digit(&mut h, r, *digit);
  }
  h
}

/// Returns the highest resolution non-zero digit in an H3Index.
#[inline]
#[must_use]
pub(crate) fn leading_non_zero_digit(h: H3Index) -> Direction {
  let res = get_resolution(h);
  (1..=res)
    .filter_map(|r| get_index_digit(h, r))
    .find(|digit| *digit != Direction::Center)
    .unwrap_or(Direction::Center)
}
