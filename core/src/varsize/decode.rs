//! varsize/decode.rs
//! VarSize decoding.

use crate::varsize::types::{VarSizeError, DIGIT_BITS, DIGIT_MASK, TERMINATOR_BIT};

/// Decode a VarSize value from the front of `buf`.
///
/// # Returns
/// - `Ok((value, consumed))` where `consumed` counts the terminator byte.
/// - `Err(VarSizeError::Truncated)` if `buf` ends before a terminator.
/// - `Err(VarSizeError::Overflow)` if the digits do not fit in a `u64`.
pub fn decode(buf: &[u8]) -> Result<(u64, usize), VarSizeError> {
    let mut value = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in buf.iter().enumerate() {
        let digit = u64::from(byte & DIGIT_MASK);

        if digit != 0 {
            // Reject digits whose bits would land past bit 63.
            if shift >= u64::BITS || digit > (u64::MAX >> shift) {
                return Err(VarSizeError::Overflow { at: i });
            }
            value |= digit << shift;
        }

        if byte & TERMINATOR_BIT != 0 {
            return Ok((value, i + 1));
        }
        shift = shift.saturating_add(DIGIT_BITS);
    }

    Err(VarSizeError::Truncated { consumed: buf.len() })
}
