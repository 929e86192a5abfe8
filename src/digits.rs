//! Per-resolution digit extraction and hex.camp cell hostnames.
//!
//! The decoder reads an index as two 32-bit words. Digits for resolutions 1-4
//! sit in `upper`, digits 6-15 in `lower`, and the resolution 5 digit spans
//! the word boundary:
//!
//! ```text
//!  upper: ... | r1 | r2 | r3 | r4 | r5 bit 2 |
//!  lower: | r5 bits 1-0 | r6 | r7 | ... | r15 |
//! ```
//!
//! A hostname lists the digits finest first, followed by the base cell and
//! the `h3.hex.camp` suffix, e.g. `4.3.4.6.0.20.h3.hex.camp`.

use tracing::{debug, trace};

use crate::constants::*;
use crate::error::CodecError;
use crate::h3_index::{cell_from_parts, get_base_cell_number, get_resolution, is_valid_cell};
use crate::types::{Direction, H3Index, SplitIndex};

#[inline]
fn check_res(res: i32) -> Result<(), CodecError> {
  if (1..=MAX_H3_RES).contains(&res) {
    Ok(())
  } else {
    debug!(res, "resolution outside 1..=15");
    Err(CodecError::ResDomain(res))
  }
}

/// Right shift of `upper` for resolutions 1-4.
#[inline(always)]
const fn upper_shift(res: i32) -> i32 {
  1 + (MAX_H3_RES - UPPER_WORD_RES_OFFSET - res) * H3_PER_DIGIT_OFFSET as i32
}

/// Right shift of `lower` for resolutions 6-15.
#[inline(always)]
const fn lower_shift(res: i32) -> i32 {
  (MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET as i32
}

/// Reads the raw 3-bit digit for `res` from the two words. `res` must be in 1..=15.
#[inline]
const fn raw_digit(split: SplitIndex, res: i32) -> u8 {
  let bits = if res < STRADDLE_RES {
    split.upper >> upper_shift(res)
  } else if res > STRADDLE_RES {
    split.lower >> lower_shift(res)
  } else {
    ((split.upper & 1) << 2) | (split.lower >> STRADDLE_LOWER_SHIFT)
  };
  (bits & SPLIT_DIGIT_MASK) as u8
}

fn digit_at(split: SplitIndex, res: i32) -> Result<Direction, CodecError> {
  let raw = raw_digit(split, res);
  Direction::try_from(raw).map_err(|_| {
    debug!(res, upper = split.upper, lower = split.lower, "unused digit within resolution");
    CodecError::InvalidDigit { res, digit: raw }
  })
}

/// Extracts the digit at a single resolution level.
///
/// # Errors
/// `CodecError::ResDomain` if `res` is outside 1..=15, `CodecError::InvalidDigit`
/// if the level holds the unused value 7.
pub fn extract_digit(split: SplitIndex, res: i32) -> Result<Direction, CodecError> {
  check_res(res)?;
  digit_at(split, res)
}

/// Extracts the digits for resolutions `1..=res`, coarsest first.
///
/// # Errors
/// `CodecError::ResDomain` if `res` is outside 1..=15, `CodecError::InvalidDigit`
/// if any level up to `res` holds the unused value 7.
pub fn extract_digits(split: SplitIndex, res: i32) -> Result<Vec<Direction>, CodecError> {
  check_res(res)?;
  (1..=res).map(|r| digit_at(split, r)).collect()
}

/// Returns the base cell number of a split index.
#[inline]
pub fn extract_base_cell(split: SplitIndex) -> i32 {
  get_base_cell_number(H3Index::from(split))
}

/// Builds a hostname by prepending each digit, in the order given, to
/// `<base_cell>.h3.hex.camp`. With digits ordered coarsest first, the finest
/// digit ends up leftmost.
#[must_use]
pub fn build_hostname(base_cell: i32, digits: &[Direction]) -> String {
  let mut hostname = format!("{base_cell}.{HOSTNAME_SUFFIX}");
  for digit in digits {
    hostname.insert(0, '.');
    hostname.insert(0, char::from(b'0' + *digit as u8));
  }
  hostname
}

/// Hostname of `h` at an explicit resolution. The resolution stored in the index is
/// not consulted.
///
/// # Errors
/// Same as [`extract_digits`].
pub fn cell_to_hostname_at_res(h: H3Index, res: i32) -> Result<String, CodecError> {
  let split = SplitIndex::from(h);
  let digits = extract_digits(split, res)?;
  let hostname = build_hostname(extract_base_cell(split), &digits);
  trace!(cell = h.0, res, hostname = %hostname, "built hostname");
  Ok(hostname)
}

/// Hostname of a valid cell at its own resolution. Resolution 0 cells yield
/// `<base_cell>.h3.hex.camp`.
///
/// # Errors
/// `CodecError::InvalidCell` if `h` is not a valid cell index.
pub fn cell_to_hostname(h: H3Index) -> Result<String, CodecError> {
  if !is_valid_cell(h) {
    debug!(cell = h.0, "hostname requested for invalid cell");
    return Err(CodecError::InvalidCell(h.0));
  }
  match get_resolution(h) {
    0 => Ok(build_hostname(extract_base_cell(SplitIndex::from(h)), &[])),
    res => cell_to_hostname_at_res(h, res),
  }
}

fn parse_base_cell(label: &str) -> Option<i32> {
  // Only the canonical decimal form: no sign, no leading zeros.
  if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) || (label.len() > 1 && label.starts_with('0')) {
    return None;
  }
  label.parse::<i32>().ok().filter(|bc| *bc < NUM_BASE_CELLS)
}

fn parse_digit(label: &str) -> Option<Direction> {
  match label.as_bytes() {
    [b @ b'0'..=b'6'] => Direction::try_from(*b - b'0').ok(),
    _ => None,
  }
}

/// Parses a hostname produced by [`build_hostname`] back into a cell index.
///
/// The suffix is matched case-insensitively and a trailing root dot is accepted.
///
/// # Errors
/// `CodecError::InvalidHostname` if the suffix is missing, a label is not a digit
/// 0-6 or a base cell 0-121, there are more than 15 digits, or the digits describe
/// a cell that cannot exist under a pentagon.
pub fn hostname_to_cell(hostname: &str) -> Result<H3Index, CodecError> {
  let invalid = |reason: &str| {
    debug!(hostname, reason, "rejected hostname");
    CodecError::InvalidHostname(format!("{hostname:?}: {reason}"))
  };

  let lowered = hostname.to_ascii_lowercase();
  let trimmed = lowered.strip_suffix('.').unwrap_or(&lowered);
  let labels = trimmed
    .strip_suffix(HOSTNAME_SUFFIX)
    .and_then(|rest| rest.strip_suffix('.'))
    .ok_or_else(|| invalid("missing h3.hex.camp suffix"))?;

  let mut labels = labels.rsplit('.');
  let base_cell = labels
    .next()
    .and_then(parse_base_cell)
    .ok_or_else(|| invalid("base cell label is not a number in 0..122"))?;

  // rsplit yields the coarsest digit first.
  let digits = labels
    .map(parse_digit)
    .collect::<Option<Vec<_>>>()
    .ok_or_else(|| invalid("digit label is not in 0..=6"))?;
  if digits.len() > MAX_H3_RES as usize {
    return Err(invalid("more than 15 digit labels"));
  }

  let cell = cell_from_parts(base_cell, &digits);
  if !is_valid_cell(cell) {
    return Err(invalid("digits are not a valid path under this base cell"));
  }
  trace!(hostname, cell = cell.0, "parsed hostname");
  Ok(cell)
}
