//! varsize/mod.rs
//! Self-terminating variable-length integers used for the container prefix.
//!
//! Wire notes:
//! - Base-128 digits, least-significant digit first.
//! - The high bit marks the *last* byte, not a continuation. Every byte
//!   before the terminator has `0x80` clear.
//! - `0` encodes as the single byte `0x80`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
