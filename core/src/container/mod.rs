//! container/mod.rs
//! Self-describing container: `[VarSize(original_len)][payload]`.
//!
//! Notes:
//! - No magic, version or codec id is stored; the prefix/payload split is the
//!   whole format.
//! - Flags are not stored either. Decompress with the flags used to compress.
//! - Both directions are single-shot and keep no state between calls.

pub mod config;
pub mod compress;
pub mod decompress;

pub use config::*;
pub use compress::*;
pub use decompress::*;

use crate::compression::{codec_for, BlockCodec, CompressionCodec};
use crate::sizing::decompressed_len;
use crate::types::ContainerError;

/// Parsed container layout, obtained without decompressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    pub original_len: usize,
    pub prefix_len: usize,
    pub payload_len: usize,
}

/// Read the prefix and report the container layout.
pub fn inspect(container: &[u8]) -> Result<ContainerInfo, ContainerError> {
    let (original_len, prefix_len) = decompressed_len(container)?;
    Ok(ContainerInfo {
        original_len,
        prefix_len,
        payload_len: container.len() - prefix_len,
    })
}

/// A codec bound to a configuration.
pub struct ContainerCodec {
    codec: Box<dyn BlockCodec>,
    config: ContainerConfig,
}

impl ContainerCodec {
    pub fn new(codec: Box<dyn BlockCodec>, config: ContainerConfig) -> Self {
        Self { codec, config }
    }

    pub fn with_codec(codec: CompressionCodec, config: ContainerConfig) -> Self {
        Self::new(codec_for(codec), config)
    }

    pub fn codec(&self) -> &dyn BlockCodec {
        self.codec.as_ref()
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    pub fn compress(&self, raw: &[u8], flags: u32) -> Result<Vec<u8>, ContainerError> {
        compress(raw, self.codec.as_ref(), flags, &self.config)
    }

    pub fn decompress(&self, container: &[u8], flags: u32) -> Result<Vec<u8>, ContainerError> {
        decompress(container, self.codec.as_ref(), flags, &self.config)
    }
}

impl Default for ContainerCodec {
    fn default() -> Self {
        Self::with_codec(CompressionCodec::default(), ContainerConfig::default())
    }
}

impl std::fmt::Debug for ContainerCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerCodec")
            .field("codec", &self.codec.name())
            .field("config", &self.config)
            .finish()
    }
}
