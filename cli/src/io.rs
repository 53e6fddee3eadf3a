//! File loading and saving. The core only ever sees byte buffers.

use anyhow::{Context, Result};
use lzjb_core::constants::CONTAINER_EXTENSION;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::Mode;

pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

pub fn save_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("cannot write {}", path.display()))
}

/// Output path used when `--output` is not given.
pub fn default_output(input: &Path, mode: Mode) -> PathBuf {
    match mode {
        Mode::Compress => with_suffix(input, CONTAINER_EXTENSION),
        Mode::Decompress => {
            if input.extension().is_some_and(|ext| ext == CONTAINER_EXTENSION) {
                input.with_extension("")
            } else {
                with_suffix(input, "out")
            }
        }
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_appends_extension() {
        assert_eq!(default_output(Path::new("a/b.txt"), Mode::Compress), PathBuf::from("a/b.txt.lzjb"));
    }

    #[test]
    fn decompress_strips_extension() {
        assert_eq!(default_output(Path::new("b.txt.lzjb"), Mode::Decompress), PathBuf::from("b.txt"));
        assert_eq!(default_output(Path::new("b.bin"), Mode::Decompress), PathBuf::from("b.bin.out"));
    }
}
