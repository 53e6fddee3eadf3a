//! codecs/lzjb.rs
//! LZJB block compressor/decompressor (the ZFS Lempel-Ziv variant).
//!
//! Stream layout:
//! - Items are grouped by eight under a leading copy-map byte; bit `i` of the
//!   map (LSB first) marks item `i` as a back-reference.
//! - A literal item is one byte.
//! - A back-reference is two bytes: the top 6 bits hold `len - MATCH_MIN`,
//!   the remaining 10 bits hold the distance back into the output.
//! - The first item is always a literal, so bit 0 of the first map byte is
//!   clear. Stored payloads start with `STORED_TAG`, which has it set.

use crate::compression::codecs::{encode_limit, store, stored_body, STORED_OVERHEAD};
use crate::compression::constants::lzjb::{
    GROUP_MAX, LEMPEL_SIZE, MATCH_BITS, MATCH_MAX, MATCH_MIN, NBBY, OFFSET_MASK,
};
use crate::compression::types::{BlockCodec, CompressionCodec, CompressionError};

#[derive(Debug, Default, Clone, Copy)]
pub struct LzjbCodec;

impl LzjbCodec {
    pub fn new() -> Self { Self }
}

impl BlockCodec for LzjbCodec {
    fn id(&self) -> CompressionCodec {
        CompressionCodec::Lzjb
    }

    fn compress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<usize, CompressionError> {
        let limit = encode_limit(src, dst);
        match lzjb_compress(src, &mut dst[..limit]) {
            Some(n) => Ok(n),
            None => store(self.name(), src, dst),
        }
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<(), CompressionError> {
        if let Some(body) = stored_body(src, dst) {
            dst.copy_from_slice(body);
            return Ok(());
        }
        lzjb_decompress(src, dst)
    }

    fn worst_case_expansion(&self, _src_len: usize) -> usize {
        STORED_OVERHEAD
    }
}

/// Compress `src` into `dst`.
///
/// Returns `None` as soon as a full group might no longer fit, which callers
/// treat as "incompressible". A successful result is always `< dst.len()`
/// unless both are empty.
pub fn lzjb_compress(src: &[u8], dst: &mut [u8]) -> Option<usize> {
    let s_len = src.len();
    let d_len = dst.len();
    let mut lempel = [0u16; LEMPEL_SIZE];

    let mut s = 0usize;
    let mut d = 0usize;
    let mut copymap = 0usize;
    let mut copymask: u32 = 1 << (NBBY - 1);

    while s < s_len {
        copymask <<= 1;
        if copymask == 1 << NBBY {
            if d + GROUP_MAX >= d_len {
                return None;
            }
            copymask = 1;
            copymap = d;
            dst[d] = 0;
            d += 1;
        }

        // Too close to the end for a full-length match.
        if s + MATCH_MAX > s_len {
            dst[d] = src[s];
            d += 1;
            s += 1;
            continue;
        }

        let mut hash = (usize::from(src[s]) << 16) + (usize::from(src[s + 1]) << 8) + usize::from(src[s + 2]);
        hash += hash >> 9;
        hash += hash >> 5;
        let hp = &mut lempel[hash & (LEMPEL_SIZE - 1)];
        let offset = usize::from((s as u16).wrapping_sub(*hp)) & OFFSET_MASK;
        *hp = s as u16;

        if offset != 0 && offset <= s && src[s..s + MATCH_MIN] == src[s - offset..s - offset + MATCH_MIN] {
            let cpy = s - offset;
            dst[copymap] |= copymask as u8;

            let mut mlen = MATCH_MIN;
            while mlen < MATCH_MAX && src[s + mlen] == src[cpy + mlen] {
                mlen += 1;
            }

            dst[d] = (((mlen - MATCH_MIN) << (NBBY - MATCH_BITS)) | (offset >> NBBY)) as u8;
            dst[d + 1] = offset as u8;
            d += 2;
            s += mlen;
        } else {
            dst[d] = src[s];
            d += 1;
            s += 1;
        }
    }

    Some(d)
}

/// Decompress `src` until exactly `dst.len()` bytes have been produced.
///
/// A back-reference that would run past the end of `dst` is clamped. Input
/// left over once `dst` is full is corrupt.
pub fn lzjb_decompress(src: &[u8], dst: &mut [u8]) -> Result<(), CompressionError> {
    const CODEC: &str = "lzjb";
    let d_len = dst.len();

    let mut s = 0usize;
    let mut d = 0usize;
    let mut copymap = 0u8;
    let mut copymask: u32 = 1 << (NBBY - 1);

    let truncated = |at: usize| {
        CompressionError::corrupt(CODEC, format!("payload truncated at byte {at} with {d_len} output bytes expected"))
    };

    while d < d_len {
        copymask <<= 1;
        if copymask == 1 << NBBY {
            copymask = 1;
            copymap = *src.get(s).ok_or_else(|| truncated(s))?;
            s += 1;
        }

        if u32::from(copymap) & copymask != 0 {
            let token = src.get(s..s + 2).ok_or_else(|| truncated(s))?;
            let mlen = (usize::from(token[0]) >> (NBBY - MATCH_BITS)) + MATCH_MIN;
            let offset = ((usize::from(token[0]) << NBBY) | usize::from(token[1])) & OFFSET_MASK;
            s += 2;

            if offset == 0 || offset > d {
                return Err(CompressionError::corrupt(
                    CODEC,
                    format!("copy at output {d} has invalid offset {offset}"),
                ));
            }

            // Byte-by-byte: source and destination ranges may overlap.
            let cpy = d - offset;
            let mlen = mlen.min(d_len - d);
            for i in 0..mlen {
                dst[d + i] = dst[cpy + i];
            }
            d += mlen;
        } else {
            dst[d] = *src.get(s).ok_or_else(|| truncated(s))?;
            d += 1;
            s += 1;
        }
    }

    if s != src.len() {
        return Err(CompressionError::corrupt(
            CODEC,
            format!("{} trailing byte(s) after {d_len} output bytes", src.len() - s),
        ));
    }
    Ok(())
}
