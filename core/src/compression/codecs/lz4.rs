//! codecs/lz4.rs
//! LZ4 block codec (no frame, no size prefix: the container carries the length).
use lz4_flex::block::{compress_into, decompress_into};

use crate::compression::codecs::{encode_limit, store, stored_body, STORED_OVERHEAD};
use crate::compression::types::{BlockCodec, CompressionCodec, CompressionError};

/// LZ4 block compressor.
/// Note: block mode exposes no levels or dictionaries.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4Codec;

impl Lz4Codec {
    pub fn new() -> Self { Self }
}

impl BlockCodec for Lz4Codec {
    fn id(&self) -> CompressionCodec {
        CompressionCodec::Lz4
    }

    fn compress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<usize, CompressionError> {
        let limit = encode_limit(src, dst);
        if limit > 0 {
            if let Ok(n) = compress_into(src, &mut dst[..limit]) {
                if n < src.len() {
                    return Ok(n);
                }
            }
        }
        store(self.name(), src, dst)
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<(), CompressionError> {
        if let Some(body) = stored_body(src, dst) {
            dst.copy_from_slice(body);
            return Ok(());
        }

        let expected = dst.len();
        let n = decompress_into(src, dst)
            .map_err(|e| CompressionError::corrupt(self.name(), e.to_string()))?;
        if n != expected {
            return Err(CompressionError::corrupt(
                self.name(),
                format!("decoded size {} != prefix {}", n, expected),
            ));
        }
        Ok(())
    }

    fn worst_case_expansion(&self, _src_len: usize) -> usize {
        STORED_OVERHEAD
    }
}
