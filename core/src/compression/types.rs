//! compression/types.rs
//! Codec contract, codec identifiers and codec errors.
use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::codec_ids;

/// FFI-safe enum for block codec identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionCodec {
    Lzjb    = codec_ids::LZJB,
    Stored  = codec_ids::STORED,
    Lz4     = codec_ids::LZ4,
    Deflate = codec_ids::DEFLATE,
    Zstd    = codec_ids::ZSTD,
}

impl CompressionCodec {
    pub const ALL: [CompressionCodec; 5] = [
        CompressionCodec::Lzjb,
        CompressionCodec::Stored,
        CompressionCodec::Lz4,
        CompressionCodec::Deflate,
        CompressionCodec::Zstd,
    ];

    pub fn verify(raw: u16) -> Result<(), CompressionError> {
        CompressionCodec::try_from_primitive(raw)
            .map(|_| ())
            .map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompressionCodec::Lzjb    => "lzjb",
            CompressionCodec::Stored  => "stored",
            CompressionCodec::Lz4     => "lz4",
            CompressionCodec::Deflate => "deflate",
            CompressionCodec::Zstd    => "zstd",
        }
    }
}

impl Default for CompressionCodec {
    fn default() -> Self {
        CompressionCodec::Lzjb
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompressionCodec::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown codec: {s}. Available: lzjb, stored, lz4, deflate, zstd")
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    /// Compressed output does not fit in the destination capacity.
    #[error("codec {codec} overflowed destination capacity {capacity}")]
    Overflow { codec: &'static str, capacity: usize },

    /// Payload is malformed for the requested output length.
    #[error("codec {codec} found corrupt payload: {msg}")]
    Corrupt { codec: &'static str, msg: String },

    #[error("unsupported compression codec: {codec_id:#06x}")]
    UnsupportedCodec { codec_id: u16 },
}

impl CompressionError {
    pub fn corrupt(codec: &'static str, msg: impl Into<String>) -> Self {
        CompressionError::Corrupt { codec, msg: msg.into() }
    }
}

/// Single-shot block codec contract consumed by the container.
///
/// Implementations must never write past the slices they are handed and
/// must be safe to share between threads: every call is self-contained.
pub trait BlockCodec: Send + Sync {
    fn id(&self) -> CompressionCodec;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Compress `src` into `dst`, returning the number of bytes produced.
    /// Fails with `Overflow` if the payload cannot fit in `dst.len()` bytes.
    fn compress(&self, src: &[u8], dst: &mut [u8], flags: u32) -> Result<usize, CompressionError>;

    /// Decompress `src` so that exactly `dst.len()` bytes are written.
    fn decompress(&self, src: &[u8], dst: &mut [u8], flags: u32) -> Result<(), CompressionError>;

    /// Largest number of bytes the payload can exceed `src_len` by.
    fn worst_case_expansion(&self, _src_len: usize) -> usize {
        0
    }
}
