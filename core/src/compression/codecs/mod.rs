//! compression/codecs/mod.rs
//! Concrete block codecs.
//!
//! Shared policy: a compressor that cannot make the input strictly smaller
//! emits a stored payload instead: `STORED_TAG` followed by the input verbatim.
//! Streams compressed here never exceed the input length, so a tagged payload
//! exactly one byte longer than its output is always a stored one.

pub mod lzjb;
pub mod stored;
pub mod lz4;
pub mod deflate;
pub mod zstd;

pub use self::lzjb::*;
pub use self::stored::*;
pub use self::lz4::*;
pub use self::deflate::*;
pub use self::zstd::*;

use crate::compression::types::CompressionError;

/// Leading byte of a stored payload. Bit 0 is set, and no valid LZJB stream
/// starts that way: its first item is always a literal.
pub const STORED_TAG: u8 = 0xFF;

/// Bytes a stored payload adds on top of the input.
pub const STORED_OVERHEAD: usize = 1;

/// Write `STORED_TAG` and `src` into `dst`.
pub(crate) fn store(codec: &'static str, src: &[u8], dst: &mut [u8]) -> Result<usize, CompressionError> {
    let capacity = dst.len();
    let (tag, body) = dst
        .get_mut(..src.len() + STORED_OVERHEAD)
        .and_then(|out| out.split_first_mut())
        .ok_or(CompressionError::Overflow { codec, capacity })?;
    *tag = STORED_TAG;
    body.copy_from_slice(src);
    Ok(src.len() + STORED_OVERHEAD)
}

/// The input bytes of a stored payload, or `None` if `src` is a codec stream.
pub(crate) fn stored_body<'a>(src: &'a [u8], dst: &[u8]) -> Option<&'a [u8]> {
    match src.split_first() {
        Some((&STORED_TAG, body)) if body.len() == dst.len() => Some(body),
        _ => None,
    }
}

/// Capacity a compressor may use before it must fall back to storing.
#[inline]
pub(crate) fn encode_limit(src: &[u8], dst: &[u8]) -> usize {
    dst.len().min(src.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_payload_is_tagged() {
        let mut dst = [0u8; 8];
        let n = store("test", b"abc", &mut dst).unwrap();
        assert_eq!(&dst[..n], &[STORED_TAG, b'a', b'b', b'c']);
        assert_eq!(stored_body(&dst[..n], &[0u8; 3]), Some(&b"abc"[..]));
    }

    #[test]
    fn untagged_or_misfit_payload_is_not_stored() {
        assert_eq!(stored_body(b"abc", &[0u8; 3]), None);
        assert_eq!(stored_body(&[STORED_TAG, b'a'], &[0u8; 3]), None);
        assert_eq!(stored_body(&[], &[]), None);
    }

    #[test]
    fn store_needs_room_for_tag() {
        let mut dst = [0u8; 3];
        let err = store("test", b"abc", &mut dst).unwrap_err();
        assert_eq!(err, CompressionError::Overflow { codec: "test", capacity: 3 });
    }
}
