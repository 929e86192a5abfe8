//! H3 index bit layout and hex.camp naming constants.

// H3 grid system constants

/// Maximum H3 resolution; H3 has 16 resolutions, numbered 0 through 15.
pub const MAX_H3_RES: i32 = 15;
/// The number of H3 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// The number of pentagons per resolution.
pub const NUM_PENTAGONS: usize = 12;

// H3 index bit layout constants (as u64 for direct use in bitwise ops)

/// The number of bits in an H3 index.
pub const H3_NUM_BITS: u8 = 64;
/// The bit offset of the mode in an H3 index.
pub const H3_MODE_OFFSET: u8 = 59;
/// The bit offset of the base cell in an H3 index.
pub const H3_BC_OFFSET: u8 = 45;
/// The bit offset of the resolution in an H3 index.
pub const H3_RES_OFFSET: u8 = 52;
/// The bit offset of the reserved bits in an H3 index.
pub const H3_RESERVED_OFFSET: u8 = 56;
/// The number of bits in a single H3 resolution digit.
pub const H3_PER_DIGIT_OFFSET: u8 = 3;

// Masks for H3 index manipulation
/// 1 in the highest bit, 0's everywhere else.
pub const H3_HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 1's in the 4 mode bits, 0's everywhere else.
pub const H3_MODE_MASK: u64 = 0b1111u64 << H3_MODE_OFFSET;
/// 0's in the 4 mode bits, 1's everywhere else.
pub const H3_MODE_MASK_NEGATIVE: u64 = !H3_MODE_MASK;
/// 1's in the 7 base cell bits, 0's everywhere else.
pub const H3_BC_MASK: u64 = 0b111_1111u64 << H3_BC_OFFSET;
/// 0's in the 7 base cell bits, 1's everywhere else.
pub const H3_BC_MASK_NEGATIVE: u64 = !H3_BC_MASK;
/// 1's in the 4 resolution bits, 0's everywhere else.
pub const H3_RES_MASK: u64 = 0b1111u64 << H3_RES_OFFSET;
/// 0's in the 4 resolution bits, 1's everywhere else.
pub const H3_RES_MASK_NEGATIVE: u64 = !H3_RES_MASK;
/// 1's in the 3 reserved bits, 0's everywhere else.
pub const H3_RESERVED_MASK: u64 = 0b111u64 << H3_RESERVED_OFFSET;
/// 1's in the 3 bits of a single H3 digit.
pub const H3_DIGIT_MASK: u64 = 0b111u64;
/// Raw digit value marking a resolution level below the cell's own resolution.
pub const H3_UNUSED_DIGIT: u8 = 7;

// H3 index modes
/// Mode for H3 cell indexes.
pub const H3_CELL_MODE: u8 = 1;

/// H3 index with mode 0, res 0, base cell 0, and 7 for all index digits.
/// Typically used to initialize the creation of an H3 cell index.
///
/// Bit layout:
/// 1 (reserved) | 4 (mode) | 3 (reserved) | 4 (resolution) | 7 (base cell) | 45 (digits 1-15)
pub const H3_INIT: u64 = 0x0000_1fff_ffff_ffff;

// Two-word layout, as read by the digit decoder

/// Mask for a single digit read out of one 32-bit word.
pub const SPLIT_DIGIT_MASK: u32 = 0b111;
/// The only resolution whose digit spans both words: bit 0 of `upper` and bits 30-31 of `lower`.
pub const STRADDLE_RES: i32 = 5;
/// Subtracted from `MAX_H3_RES` when locating a digit in the upper word.
pub const UPPER_WORD_RES_OFFSET: i32 = 11;
/// Right shift bringing the two `lower` bits of the straddling digit down to bits 0-1.
pub const STRADDLE_LOWER_SHIFT: u32 = 30;

// hex.camp naming

/// Suffix every cell hostname ends with.
pub const HOSTNAME_SUFFIX: &str = "h3.hex.camp";
/// Domain under which tokens are served as subdomains.
pub const TOKEN_URL_DOMAIN: &str = "hex.camp";
/// Width, in hex characters, of a cell index string produced from a token.
pub const CELL_HEX_WIDTH: usize = 15;
/// Leading nibble of every token-derived cell string (mode 1, high bit clear).
pub const CELL_HEX_PREFIX: char = '8';
/// Nibble used to right-pad a token-derived cell string.
pub const CELL_HEX_PAD: char = 'f';

/// Base cell numbers that are pentagons.
pub const PENTAGON_BASE_CELLS: [i32; NUM_PENTAGONS] = [4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117];
