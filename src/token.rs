//! Base-32 tokens for cell indexes.
//!
//! A token is the RFC 4648 base-32 encoding (lowercase, unpadded) of the bytes
//! of a cell string with its leading `8` nibble and trailing `f` padding
//! removed. Decoding restores both:
//!
//! ```text
//!  "uxirkffr" -> a5 d1 15 14 b1 -> "8" + "a5d11514b1" + "ffff" = "8a5d11514b1ffff"
//! ```
//!
//! Padding is not recorded in the token, so encoding strips every trailing `f`
//! and keeps one back only when needed for a whole number of bytes. A cell
//! whose data bytes end in `ff` therefore encodes to a shorter token than the
//! one it may have been decoded from; both tokens decode to the same cell
//! string.

use data_encoding::Encoding;
use data_encoding_macro::new_encoding;
use tracing::{debug, trace};

use crate::constants::*;
use crate::error::CodecError;
use crate::h3_index::{h3_to_string, string_to_h3};
use crate::types::H3Index;

/// RFC 4648 base-32, lowercase, no padding. Upper-case input is folded to lower
/// case and leftover bits of a final partial symbol are ignored.
const TOKEN_ENCODING: Encoding = new_encoding! {
  symbols: "abcdefghijklmnopqrstuvwxyz234567",
  translate_from: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
  translate_to: "abcdefghijklmnopqrstuvwxyz",
  check_trailing_bits: false,
};

/// Decodes a token into a 15-character cell index hex string beginning with `8`.
///
/// # Errors
/// * `CodecError::EmptyToken` for an empty token.
/// * `CodecError::InvalidToken` if the token has a character outside the alphabet
///   or a length no base-32 encoding produces.
/// * `CodecError::TokenTooLong` if the decoded bytes do not fit in 15 hex characters.
pub fn decode_token(token: &str) -> Result<String, CodecError> {
  if token.is_empty() {
    debug!("empty token");
    return Err(CodecError::EmptyToken);
  }
  let bytes = TOKEN_ENCODING.decode(token.as_bytes()).map_err(|err| {
    debug!(token, position = err.position, kind = %err.kind, "token is not base-32");
    CodecError::InvalidToken { position: err.position }
  })?;

  let mut cell_hex = String::with_capacity(CELL_HEX_WIDTH);
  cell_hex.push(CELL_HEX_PREFIX);
  cell_hex.push_str(&hex::encode(&bytes));
  if cell_hex.len() > CELL_HEX_WIDTH {
    debug!(token, len = cell_hex.len(), "token too long for a cell index");
    return Err(CodecError::TokenTooLong(cell_hex.len()));
  }
  while cell_hex.len() < CELL_HEX_WIDTH {
    cell_hex.push(CELL_HEX_PAD);
  }

  trace!(token, cell = %cell_hex, "decoded token");
  Ok(cell_hex)
}

/// Encodes a 15-character cell index hex string (leading `8`) as the shortest
/// token that decodes back to it.
///
/// # Errors
/// `CodecError::InvalidCellString` if the string is not 15 hex characters, does
/// not begin with `8`, or holds nothing but padding after the `8`.
pub fn encode_token(cell_hex: &str) -> Result<String, CodecError> {
  let invalid = |reason: &str| {
    debug!(cell = cell_hex, reason, "rejected cell string");
    CodecError::InvalidCellString(format!("{cell_hex:?}: {reason}"))
  };

  if cell_hex.len() != CELL_HEX_WIDTH || !cell_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(invalid("expected 15 hex characters"));
  }
  let lowered = cell_hex.to_ascii_lowercase();
  let body = lowered
    .strip_prefix(CELL_HEX_PREFIX)
    .ok_or_else(|| invalid("expected leading 8"))?;

  // Whole bytes only: keep back one pad nibble when stripping leaves an odd count.
  let data_len = body.trim_end_matches(CELL_HEX_PAD).len();
  let body = &body[..data_len + data_len % 2];
  if body.is_empty() {
    return Err(invalid("no data after removing padding"));
  }

  let bytes = hex::decode(body).map_err(|_| invalid("expected hex characters"))?;
  let token = TOKEN_ENCODING.encode(&bytes);
  trace!(cell = cell_hex, token = %token, "encoded token");
  Ok(token)
}

/// Decodes a token straight into an `H3Index`. The index is not validated; use
/// [`crate::is_valid_cell`] before resolving it further.
///
/// # Errors
/// Same as [`decode_token`].
pub fn token_to_cell(token: &str) -> Result<H3Index, CodecError> {
  string_to_h3(&decode_token(token)?)
}

/// Encodes an `H3Index` as a token.
///
/// # Errors
/// Same as [`encode_token`]; every valid cell index is accepted.
pub fn cell_to_token(h: H3Index) -> Result<String, CodecError> {
  encode_token(&h3_to_string(h))
}

/// The hex.camp URL for a token: `https://<token>.hex.camp`.
#[must_use]
pub fn token_url(token: &str) -> String {
  format!("https://{token}.{TOKEN_URL_DOMAIN}")
}
