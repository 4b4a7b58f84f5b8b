//! Bit layout of a packed tile byte.
//!
//! ```text
//!   7 6 | 5 4 3 | 2 1 0
//!   lvl | type  | pattern
//! ```

/// Shift of the 2-bit level field.
pub const LEVEL_SHIFT: u8 = 6;

/// Mask of the level value before shifting.
pub const LEVEL_MASK: u8 = 0b11;

/// Shift of the 3-bit type field.
pub const TYPE_SHIFT: u8 = 3;

/// Mask of the type value before shifting.
pub const TYPE_MASK: u8 = 0b111;

/// Shift of the 3-bit pattern field.
pub const PATTERN_SHIFT: u8 = 0;

/// Mask of the pattern value before shifting.
pub const PATTERN_MASK: u8 = 0b111;

/// Bits occupied by the level field inside the byte (0xC0).
pub const LEVEL_BITS: u8 = LEVEL_MASK << LEVEL_SHIFT;

/// Bits occupied by the type field inside the byte (0x38).
pub const TYPE_BITS: u8 = TYPE_MASK << TYPE_SHIFT;

/// Bits occupied by the pattern field inside the byte (0x07).
pub const PATTERN_BITS: u8 = PATTERN_MASK << PATTERN_SHIFT;

/// Highest upgrade tier a tile can reach.
pub const MAX_LEVEL: u8 = 3;

/// Bytes per packed tile.
pub const TILE_BYTES: usize = 1;
