//! codecs/stored.rs
//! Pass-through codec. The payload is the input itself, with no tag.

use crate::compression::types::{BlockCodec, CompressionCodec, CompressionError};

#[derive(Debug, Default, Clone, Copy)]
pub struct StoredCodec;

impl StoredCodec {
    pub fn new() -> Self { Self }
}

impl BlockCodec for StoredCodec {
    fn id(&self) -> CompressionCodec {
        CompressionCodec::Stored
    }

    fn compress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<usize, CompressionError> {
        let capacity = dst.len();
        let out = dst
            .get_mut(..src.len())
            .ok_or(CompressionError::Overflow { codec: self.name(), capacity })?;
        out.copy_from_slice(src);
        Ok(src.len())
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8], _flags: u32) -> Result<(), CompressionError> {
        if src.len() != dst.len() {
            return Err(CompressionError::corrupt(
                self.name(),
                format!("stored payload is {} bytes, expected {}", src.len(), dst.len()),
            ));
        }
        dst.copy_from_slice(src);
        Ok(())
    }
}
