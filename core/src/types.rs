use thiserror::Error;

use crate::compression::CompressionError;
use crate::varsize::VarSizeError;

/// Unified container error.
/// - Every failure of `compress`/`decompress` maps to exactly one kind.
/// - `From<T>` impls enable `?` across varsize, sizing and codec calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Container (or its length prefix) ends before it is complete.
    #[error("truncated input: {0}")]
    TruncatedInput(String),

    /// Output buffer cannot be allocated, or its size exceeds the configured ceiling.
    #[error("cannot allocate {requested} byte output buffer")]
    AllocationFailure { requested: u64 },

    /// Compressed payload does not fit in the computed capacity.
    #[error("codec {codec} overflowed payload capacity of {capacity} bytes")]
    CodecOverflow { codec: &'static str, capacity: usize },

    /// Codec rejected the payload as malformed.
    #[error("corrupt payload ({codec}): {msg}")]
    CorruptPayload { codec: &'static str, msg: String },

    /// Length prefix does not fit in 64 bits.
    #[error("length prefix overflows u64 at byte {at}")]
    PrefixOverflow { at: usize },

    /// Codec id not known to the registry.
    #[error("unsupported codec id {0:#06x}")]
    UnsupportedCodec(u16),
}

impl From<VarSizeError> for ContainerError {
    fn from(e: VarSizeError) -> Self {
        match e {
            VarSizeError::Truncated { consumed } => ContainerError::TruncatedInput(format!(
                "length prefix unterminated after {} byte(s)",
                consumed
            )),
            VarSizeError::Overflow { at } => ContainerError::PrefixOverflow { at },
            // Only reachable if capacity planning under-sized the prefix slot.
            VarSizeError::BufferTooSmall { have, .. } => ContainerError::CodecOverflow {
                codec: "varsize",
                capacity: have,
            },
        }
    }
}

impl From<CompressionError> for ContainerError {
    fn from(e: CompressionError) -> Self {
        match e {
            CompressionError::Overflow { codec, capacity } => ContainerError::CodecOverflow { codec, capacity },
            CompressionError::Corrupt { codec, msg } => ContainerError::CorruptPayload { codec, msg },
            CompressionError::UnsupportedCodec { codec_id } => ContainerError::UnsupportedCodec(codec_id),
        }
    }
}
