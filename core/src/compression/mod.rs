//! compression/mod.rs
//! Block codecs behind the container.
//!
//! Notes:
//! - Every codec is single-shot: one source slice in, one destination slice out.
//! - Compressors fall back to a tagged stored copy when they cannot shrink the
//!   input, so no shipped codec expands its input by more than one byte.
//! - Registry resolves codec IDs and names to implementations.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use codecs::{
    lzjb_compress, lzjb_decompress, DeflateCodec, Lz4Codec, LzjbCodec, StoredCodec, ZstdCodec, STORED_OVERHEAD,
    STORED_TAG,
};
