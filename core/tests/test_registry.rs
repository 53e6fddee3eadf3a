// Codec registry: ids, names, factory.

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use lzjb_core::{
        compression::{codec_ids, create_codec, resolve, CompressionCodec, CompressionError},
        utils::enum_name_or_hex,
    };

    #[test]
    fn verify_accepts_known_ids() {
        for id in CompressionCodec::ALL {
            CompressionCodec::verify(id as u16).unwrap();
        }
    }

    #[test]
    fn verify_rejects_unknown_id() {
        let err = CompressionCodec::verify(0xBEEF).unwrap_err();
        assert_eq!(err, CompressionError::UnsupportedCodec { codec_id: 0xBEEF });
    }

    #[test]
    fn ids_are_stable() {
        assert_eq!(CompressionCodec::Lzjb as u16, codec_ids::LZJB);
        assert_eq!(CompressionCodec::Stored as u16, codec_ids::STORED);
        assert_eq!(CompressionCodec::Lz4 as u16, codec_ids::LZ4);
        assert_eq!(CompressionCodec::Deflate as u16, codec_ids::DEFLATE);
        assert_eq!(CompressionCodec::Zstd as u16, codec_ids::ZSTD);
    }

    #[test]
    fn default_codec_is_lzjb() {
        assert_eq!(CompressionCodec::default(), CompressionCodec::Lzjb);
    }

    #[test]
    fn names_round_trip() {
        for id in CompressionCodec::ALL {
            assert_eq!(CompressionCodec::from_str(&id.to_string()).unwrap(), id);
        }
        assert_eq!(CompressionCodec::from_str("LZ4").unwrap(), CompressionCodec::Lz4);
        assert!(CompressionCodec::from_str("brotli").is_err());
    }

    #[test]
    fn factory_matches_resolve() {
        for id in CompressionCodec::ALL {
            let info = resolve(id as u16).unwrap();
            let codec = create_codec(id as u16, None).unwrap();
            assert_eq!(codec.name(), info.name);
            assert_eq!(codec.id(), id);
        }
    }

    #[test]
    fn factory_rejects_unknown() {
        assert!(matches!(
            create_codec(0x00FF, None),
            Err(CompressionError::UnsupportedCodec { codec_id: 0x00FF })
        ));
    }

    #[test]
    fn factory_accepts_levels() {
        let codec = create_codec(codec_ids::ZSTD, Some(19)).unwrap();
        let mut dst = vec![0u8; 256];
        let src = b"level level level level level level level level".repeat(4);
        let n = codec.compress(&src, &mut dst, 0).unwrap();
        assert!(n < src.len());
    }

    #[test]
    fn diagnostics_name_or_hex() {
        assert_eq!(enum_name_or_hex::<CompressionCodec>(codec_ids::DEFLATE), "Deflate");
        assert_eq!(enum_name_or_hex::<CompressionCodec>(0x0042), "0x42");
    }
}
