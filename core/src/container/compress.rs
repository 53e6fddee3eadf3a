//! container/compress.rs
//!
//! Raw buffer → container.
//!
//! Steps:
//! 1. Size the output with the buffer sizer (`len + slack`).
//! 2. Allocate once, fallibly.
//! 3. Write the VarSize length prefix at offset 0.
//! 4. Let the codec fill the remaining capacity.
//! 5. Truncate to `prefix_len + payload_len`.

use tracing::{debug, warn};

use crate::compression::BlockCodec;
use crate::container::config::ContainerConfig;
use crate::sizing::{allocate, compress_capacity_for};
use crate::types::ContainerError;
use crate::utils::fmt_bytes;
use crate::varsize;

/// Compress `raw` into a self-describing container.
///
/// # Errors
/// - `AllocationFailure` if the output buffer cannot be allocated.
/// - `CodecOverflow` if the codec cannot fit the payload in the capacity left
///   after the prefix. The payload is never truncated to fit.
pub fn compress(
    raw: &[u8],
    codec: &dyn BlockCodec,
    flags: u32,
    config: &ContainerConfig,
) -> Result<Vec<u8>, ContainerError> {
    let capacity = compress_capacity_for(codec, raw.len(), config.slack())?;
    let mut out = allocate(capacity)?;

    let prefix_len = varsize::encode_into(raw.len() as u64, &mut out)?;
    let payload_cap = capacity - prefix_len;

    let payload_len = codec
        .compress(raw, &mut out[prefix_len..], flags)
        .map_err(|e| {
            warn!(codec = codec.name(), raw_len = raw.len(), capacity = payload_cap, error = %e, "compress failed");
            ContainerError::from(e)
        })?;

    if payload_len > payload_cap {
        warn!(codec = codec.name(), payload_len, capacity = payload_cap, "codec reported more bytes than it was given");
        return Err(ContainerError::CodecOverflow { codec: codec.name(), capacity: payload_cap });
    }

    out.truncate(prefix_len + payload_len);

    debug!(
        codec = codec.name(),
        raw_len = raw.len(),
        prefix = %fmt_bytes(&out[..prefix_len]),
        payload_len,
        "compressed container"
    );
    Ok(out)
}
