//! lzjb-core
//!
//! Single-shot compression into a self-describing, length-prefixed container.
//! No file I/O, no CLI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Wire format and buffer planning
pub mod varsize;
pub mod sizing;

// Codecs and the container built on them
pub mod compression;
pub mod container;

pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{codec_for, create_codec, BlockCodec, CompressionCodec, CompressionError};
    pub use crate::constants::flags;
    pub use crate::container::{compress, decompress, inspect, ContainerCodec, ContainerConfig, ContainerInfo};
    pub use crate::types::ContainerError;
}
