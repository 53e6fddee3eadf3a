//! varsize/encode.rs
//! VarSize encoding.

use crate::varsize::types::{VarSizeError, DIGIT_BITS, DIGIT_MASK, TERMINATOR_BIT};

/// Number of bytes `encode(n)` produces.
///
/// Equals `ceil(max(bit_length(n), 1) / 7)`.
#[inline]
pub fn encoded_len(n: u64) -> usize {
    let bits = (u64::BITS - n.leading_zeros()).max(1);
    bits.div_ceil(DIGIT_BITS) as usize
}

/// Write `n` into the front of `out`, returning the number of bytes written.
///
/// The loop always runs at least once so that `0` still yields one byte.
pub fn encode_into(mut n: u64, out: &mut [u8]) -> Result<usize, VarSizeError> {
    let need = encoded_len(n);
    if out.len() < need {
        return Err(VarSizeError::BufferTooSmall { have: out.len(), need });
    }

    let mut i = 0usize;
    loop {
        out[i] = (n as u8) & DIGIT_MASK;
        i += 1;
        n >>= DIGIT_BITS;
        if n == 0 {
            break;
        }
    }
    out[i - 1] |= TERMINATOR_BIT;

    debug_assert_eq!(i, need, "varsize wrote unexpected length");
    Ok(i)
}

/// Encode `n` into a freshly allocated, minimal byte sequence.
pub fn encode(mut n: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(n));
    loop {
        out.push((n as u8) & DIGIT_MASK);
        n >>= DIGIT_BITS;
        if n == 0 {
            break;
        }
    }
    if let Some(last) = out.last_mut() {
        *last |= TERMINATOR_BIT;
    }
    out
}
