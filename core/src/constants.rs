/// Fixed slack added on top of the input length when sizing the
/// compression output buffer. Covers the VarSize prefix plus the codec's
/// worst-case expansion for every codec shipped in this crate.
pub const SIZE_SLACK: usize = 128;

/// Longest VarSize prefix a `u64` length can produce (ceil(64 / 7)).
pub const MAX_VARSIZE_LEN: usize = 10;

/// Shortest possible container: a one-byte prefix and an empty payload.
pub const MIN_CONTAINER_LEN: usize = 1;

/// Default sanity ceiling for the length declared by a container prefix (1 GiB).
pub const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 1024 * 1024 * 1024;

/// Default file extension appended by the command-line driver.
pub const CONTAINER_EXTENSION: &str = "lzjb";

/// Opaque codec flags. The container never interprets them.
pub mod flags {
    /// Reserved value; every shipped codec expects it.
    pub const NONE: u32 = 0;
}
