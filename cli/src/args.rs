use clap::{ArgAction, Parser};
use lzjb_core::compression::CompressionCodec;
use std::fmt;
use std::path::PathBuf;

/// lzjb: compress files into self-describing, length-prefixed containers.
///
/// Each input is processed in order; the first failure stops the run.
#[derive(Parser, Debug)]
#[command(name = "lzjb")]
#[command(author, version, about = "Compress and decompress files into length-prefixed containers", long_about = None)]
pub struct Cli {
    /// Compress the inputs (default)
    #[arg(short = 'c', long, conflicts_with = "decompress")]
    pub compress: bool,

    /// Decompress the inputs
    #[arg(short = 'x', long)]
    pub decompress: bool,

    /// Output path
    ///
    /// Only valid with a single input. Defaults to `<input>.lzjb` when
    /// compressing and to the input with `.lzjb` stripped when decompressing.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only report errors (quiet is already the default)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-file progress (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Block codec: lzjb, stored, lz4, deflate, zstd
    #[arg(long, default_value = "lzjb")]
    pub codec: CompressionCodec,

    /// Codec level (deflate, zstd)
    #[arg(long)]
    pub level: Option<i32>,

    /// Opaque codec flags; must match between compress and decompress
    #[arg(long, default_value_t = 0)]
    pub flags: u32,

    /// Largest decompressed size a container may declare, in bytes
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Print a JSON telemetry line per file on stdout
    #[arg(long)]
    pub stats: bool,

    /// Input files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.decompress {
            Mode::Decompress
        } else {
            Mode::Compress
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress => write!(f, "compress"),
            Mode::Decompress => write!(f, "decompress"),
        }
    }
}
