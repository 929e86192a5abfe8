#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::cast_possible_truncation)] // Word splits and digit reads truncate on purpose
#![allow(clippy::cast_sign_loss)] // Resolutions are i32 to match the H3 API
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // H3 indexes read better as one hex run
#![allow(clippy::wildcard_imports)] // Allow for re-exporting from modules

//! `hexcamp-h3` turns H3 cell indexes into hex.camp names.
//!
//! Two codecs are provided:
//!
//! - **Digits and hostnames** ([`digits`]): reads the per-resolution child digits out of an
//!   index held as two 32-bit words and lays them out as a dotted hostname, finest digit first:
//!   `85283473fffffff` becomes `4.3.4.6.0.20.h3.hex.camp`.
//! - **Tokens** ([`token`]): converts between a cell's hex string and a short lowercase base-32
//!   token for URLs: `2kgrugszem7q` is the cell `8d28d1a1a59233f`.
//!
//! ```
//! use hexcamp_h3::{cell_to_hostname, token_to_cell};
//!
//! let cell = token_to_cell("2kgrugszem7q")?;
//! assert_eq!(cell_to_hostname(cell)?, "4.1.2.2.6.2.2.3.0.5.1.2.3.20.h3.hex.camp");
//! # Ok::<(), hexcamp_h3::CodecError>(())
//! ```
//!
//! Every function is pure. Rejected input is reported as a [`CodecError`] whose
//! [`kind`](CodecError::kind) separates range errors from malformed input.

// Declare modules
pub mod constants;
pub mod digits;
pub mod error;
pub mod h3_index;
pub mod token;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{CELL_HEX_WIDTH, HOSTNAME_SUFFIX, MAX_H3_RES};
pub use error::{CodecError, ErrorKind};
pub use types::{Direction, H3Index, SplitIndex, H3_NULL};

pub use digits::{
  build_hostname, cell_to_hostname, cell_to_hostname_at_res, extract_base_cell, extract_digit, extract_digits,
  hostname_to_cell,
};
pub use h3_index::inspection::{get_base_cell_number, is_base_cell_pentagon, is_pentagon, is_valid_cell};
pub use h3_index::string_conv::{h3_to_string, h3_to_string_alloc, string_to_h3};
pub use h3_index::{get_index_digit, get_resolution};
pub use token::{cell_to_token, decode_token, encode_token, token_to_cell, token_url};
