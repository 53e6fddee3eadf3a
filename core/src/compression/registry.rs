//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{DeflateCodec, Lz4Codec, LzjbCodec, StoredCodec, ZstdCodec};
use crate::compression::constants::{codec_ids, DEFAULT_LEVEL_DEFLATE, DEFAULT_LEVEL_LZ4, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{BlockCodec, CompressionCodec, CompressionError};
use crate::utils::enum_name_or_hex;
use tracing::{debug, warn};

pub struct CodecInfo {
    pub name: &'static str,
    pub default_level: i32,
}

pub fn resolve(codec_id: u16) -> Result<CodecInfo, CompressionError> {
    match codec_id {
        codec_ids::LZJB    => Ok(CodecInfo { name: "lzjb", default_level: 0 }),
        codec_ids::STORED  => Ok(CodecInfo { name: "stored", default_level: 0 }),
        codec_ids::LZ4     => Ok(CodecInfo { name: "lz4", default_level: DEFAULT_LEVEL_LZ4 }),
        codec_ids::DEFLATE => Ok(CodecInfo { name: "deflate", default_level: DEFAULT_LEVEL_DEFLATE }),
        codec_ids::ZSTD    => Ok(CodecInfo { name: "zstd", default_level: DEFAULT_LEVEL_ZSTD }),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}

pub fn create_codec(codec_id: u16, level: Option<i32>) -> Result<Box<dyn BlockCodec>, CompressionError> {
    let info = resolve(codec_id).map_err(|e| {
        warn!(codec = %enum_name_or_hex::<CompressionCodec>(codec_id), "codec not in registry");
        e
    })?;
    let level = level.unwrap_or(info.default_level);
    debug!(codec = info.name, level, "creating codec");
    match codec_id {
        codec_ids::LZJB    => Ok(Box::new(LzjbCodec::new())),
        codec_ids::STORED  => Ok(Box::new(StoredCodec::new())),
        codec_ids::LZ4     => Ok(Box::new(Lz4Codec::new())),
        codec_ids::DEFLATE => Ok(Box::new(DeflateCodec::new(level))),
        codec_ids::ZSTD    => Ok(Box::new(ZstdCodec::new(level))),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}

/// Typed shortcut over `create_codec` with the codec's default level.
pub fn codec_for(codec: CompressionCodec) -> Box<dyn BlockCodec> {
    match codec {
        CompressionCodec::Lzjb    => Box::new(LzjbCodec::new()),
        CompressionCodec::Stored  => Box::new(StoredCodec::new()),
        CompressionCodec::Lz4     => Box::new(Lz4Codec::new()),
        CompressionCodec::Deflate => Box::new(DeflateCodec::default()),
        CompressionCodec::Zstd    => Box::new(ZstdCodec::default()),
    }
}
