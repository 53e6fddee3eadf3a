//! codecs/zstd.rs
//! Zstd single-shot codec over the bulk API.
use ::zstd::bulk::{compress_to_buffer, decompress_to_buffer};

use crate::compression::codecs::{encode_limit, store, stored_body, STORED_OVERHEAD};
use crate::compression::constants::DEFAULT_LEVEL_ZSTD;
use crate::compression::types::{BlockCodec, CompressionCodec, CompressionError};

#[derive(Debug, Clone, Copy)]
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_ZSTD)
    }
}

impl BlockCodec for ZstdCodec {
    fn id(&self) -> CompressionCodec {
        CompressionCodec::Zstd
    }

    fn compress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<usize, CompressionError> {
        let limit = encode_limit(src, dst);
        if limit > 0 {
            if let Ok(n) = compress_to_buffer(src, &mut dst[..limit], self.level) {
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
        let n = decompress_to_buffer(src, dst)
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
