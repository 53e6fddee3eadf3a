//! sizing.rs
//! Output-buffer planning for single-shot compression and decompression.
//!
//! - Compression: `input_len + slack`, a heuristic upper bound that covers
//!   the VarSize prefix and the codec's worst-case expansion.
//! - Decompression: the exact length stored in the prefix, never an estimate.

use crate::compression::BlockCodec;
use crate::constants::{MAX_VARSIZE_LEN, MIN_CONTAINER_LEN};
use crate::types::ContainerError;
use crate::varsize;

/// Capacity for compressing `input_len` bytes with a fixed `slack`.
pub fn compress_capacity(input_len: usize, slack: usize) -> Result<usize, ContainerError> {
    input_len
        .checked_add(slack)
        .ok_or(ContainerError::AllocationFailure { requested: u64::MAX })
}

/// Capacity for compressing `input_len` bytes with `codec`.
///
/// Widens `slack` when the codec documents a larger worst-case expansion
/// than the fixed margin leaves room for.
pub fn compress_capacity_for(
    codec: &dyn BlockCodec,
    input_len: usize,
    slack: usize,
) -> Result<usize, ContainerError> {
    let needed = codec
        .worst_case_expansion(input_len)
        .saturating_add(MAX_VARSIZE_LEN);
    compress_capacity(input_len, slack.max(needed))
}

/// Read `(original_len, prefix_len)` from the front of a container.
pub fn decompressed_len(container: &[u8]) -> Result<(usize, usize), ContainerError> {
    if container.len() < MIN_CONTAINER_LEN {
        return Err(ContainerError::TruncatedInput("empty container".into()));
    }
    let (declared, prefix_len) = varsize::decode(container)?;
    let original_len = usize::try_from(declared)
        .map_err(|_| ContainerError::AllocationFailure { requested: declared })?;
    Ok((original_len, prefix_len))
}

/// Reject declared lengths above the caller's sanity ceiling.
pub fn check_ceiling(len: usize, ceiling: usize) -> Result<(), ContainerError> {
    if len > ceiling {
        return Err(ContainerError::AllocationFailure { requested: len as u64 });
    }
    Ok(())
}

/// Allocate a buffer of exactly `len` zeroed bytes, reporting failure instead of aborting.
pub fn allocate(len: usize) -> Result<Vec<u8>, ContainerError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ContainerError::AllocationFailure { requested: len as u64 })?;
    buf.resize(len, 0);
    Ok(buf)
}
