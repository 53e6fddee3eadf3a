/// Stable codec IDs (u16). Never written into a container; used by the
/// registry and the command-line driver.
pub mod codec_ids {
    pub const LZJB: u16    = 0x0000;
    pub const STORED: u16  = 0x0001;
    pub const LZ4: u16     = 0x0002;
    pub const DEFLATE: u16 = 0x0003;
    pub const ZSTD: u16    = 0x0004;
}

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_ZSTD: i32 = 6;
pub const DEFAULT_LEVEL_LZ4: i32 = 0; // block mode has no levels
pub const DEFAULT_LEVEL_DEFLATE: i32 = 6;

/// LZJB wire constants (from the ZFS implementation).
pub mod lzjb {
    pub const NBBY: u32 = 8;
    pub const MATCH_BITS: u32 = 6;
    pub const MATCH_MIN: usize = 3;
    pub const MATCH_MAX: usize = (1 << MATCH_BITS) + (MATCH_MIN - 1);
    pub const OFFSET_MASK: usize = (1 << (16 - MATCH_BITS)) - 1;
    pub const LEMPEL_SIZE: usize = 1024;
    /// Worst-case bytes of one copy-map group: map byte + 8 two-byte tokens.
    pub const GROUP_MAX: usize = 1 + 2 * NBBY as usize;
}
