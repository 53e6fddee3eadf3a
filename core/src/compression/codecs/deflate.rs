//! codecs/deflate.rs
//! Raw deflate via flate2's in-memory `Compress`/`Decompress` (no zlib wrapper).
use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::compression::codecs::{encode_limit, store, stored_body, STORED_OVERHEAD};
use crate::compression::constants::DEFAULT_LEVEL_DEFLATE;
use crate::compression::types::{BlockCodec, CompressionCodec, CompressionError};

#[derive(Debug, Clone, Copy)]
pub struct DeflateCodec {
    level: Compression,
}

impl DeflateCodec {
    pub fn new(level: i32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level as u32),
            _ => Compression::default(),
        };
        Self { level }
    }
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_DEFLATE)
    }
}

impl BlockCodec for DeflateCodec {
    fn id(&self) -> CompressionCodec {
        CompressionCodec::Deflate
    }

    fn compress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<usize, CompressionError> {
        let limit = encode_limit(src, dst);
        let mut enc = Compress::new(self.level, false);
        // Anything short of StreamEnd means the stream did not fit in `limit`.
        if let Ok(Status::StreamEnd) = enc.compress(src, &mut dst[..limit], FlushCompress::Finish) {
            let n = enc.total_out() as usize;
            if n < src.len() {
                return Ok(n);
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
        let mut dec = Decompress::new(false);
        match dec.decompress(src, dst, FlushDecompress::Finish) {
            Ok(Status::StreamEnd) if dec.total_out() as usize == expected => Ok(()),
            Ok(_) => Err(CompressionError::corrupt(
                self.name(),
                format!("stream did not end after {} of {} bytes", dec.total_out(), expected),
            )),
            Err(e) => Err(CompressionError::corrupt(self.name(), e.to_string())),
        }
    }

    fn worst_case_expansion(&self, _src_len: usize) -> usize {
        STORED_OVERHEAD
    }
}
