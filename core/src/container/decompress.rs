//! container/decompress.rs
//!
//! Container → raw buffer. The output is allocated to exactly the length the
//! prefix declares before the codec writes to it; it is never grown.

use tracing::{debug, warn};

use crate::compression::BlockCodec;
use crate::container::config::ContainerConfig;
use crate::sizing::{allocate, check_ceiling, decompressed_len};
use crate::types::ContainerError;

/// Decompress a container produced by [`compress`](super::compress::compress).
///
/// # Errors
/// - `TruncatedInput` if the container is empty or its prefix is unterminated.
/// - `AllocationFailure` if the declared length exceeds the configured ceiling
///   or cannot be allocated.
/// - `CorruptPayload` if the codec rejects the payload.
pub fn decompress(
    container: &[u8],
    codec: &dyn BlockCodec,
    flags: u32,
    config: &ContainerConfig,
) -> Result<Vec<u8>, ContainerError> {
    let (original_len, prefix_len) = decompressed_len(container)?;
    check_ceiling(original_len, config.max_decompressed_len()).map_err(|e| {
        warn!(original_len, ceiling = config.max_decompressed_len(), "declared length above ceiling");
        e
    })?;

    let mut out = allocate(original_len)?;
    let payload = &container[prefix_len..];

    codec.decompress(payload, &mut out, flags).map_err(|e| {
        warn!(codec = codec.name(), payload_len = payload.len(), original_len, error = %e, "decompress failed");
        ContainerError::from(e)
    })?;

    debug!(codec = codec.name(), payload_len = payload.len(), original_len, "decompressed container");
    Ok(out)
}
