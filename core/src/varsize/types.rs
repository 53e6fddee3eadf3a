//! varsize/types.rs
//! Wire constants and error type for VarSize prefixes.

use thiserror::Error;

pub use crate::constants::MAX_VARSIZE_LEN;

/// Bit set on the terminating byte.
pub const TERMINATOR_BIT: u8 = 0x80;

/// Payload bits carried by each byte.
pub const DIGIT_MASK: u8 = 0x7f;

/// Bits per digit.
pub const DIGIT_BITS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VarSizeError {
    /// Input ended before a byte with the terminator bit was seen.
    #[error("varsize truncated after {consumed} byte(s) without terminator")]
    Truncated { consumed: usize },

    /// Accumulated digits do not fit in a `u64`.
    #[error("varsize overflows u64 at byte {at}")]
    Overflow { at: usize },

    /// Destination slice cannot hold the encoded value.
    #[error("varsize needs {need} byte(s), buffer has {have}")]
    BufferTooSmall { have: usize, need: usize },
}
