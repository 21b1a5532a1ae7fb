#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use payload_codec::{
        codec::{EncryptionCodec, PayloadCodec},
        constants::{encodings, metadata_keys, MIN_SEALED_LEN, NONCE_LEN_12},
        payload::Payload,
        telemetry::CodecCounters,
        types::CodecError,
    };

    fn dummy_key() -> Vec<u8> {
        vec![0x11u8; 32]
    }

    fn other_key() -> Vec<u8> {
        vec![0x22u8; 32]
    }

    fn codec(compress: bool) -> EncryptionCodec {
        EncryptionCodec::builder("k1")
            .key("k1", &dummy_key())
            .compress(compress)
            .build()
            .unwrap()
    }

    fn sample_payloads() -> Vec<Payload> {
        vec![
            Payload::new(b"hello".to_vec()),
            Payload::new(br#"{"amount":42}"#.to_vec())
                .with_metadata("encoding", "json/plain")
                .with_metadata("content-type", "application/json"),
            Payload::new(Vec::new()).with_metadata("encoding", "binary/null"),
        ]
    }

    // --- Concrete scenarios ---

    #[test]
    fn encode_hello_yields_tagged_payload() {
        let codec = codec(true);
        let input = vec![Payload::new(b"hello".to_vec())];

        let encoded = codec.encode(&input).unwrap();
        assert_eq!(encoded.len(), 1);

        let mut expected = BTreeMap::new();
        expected.insert(metadata_keys::ENCODING.to_string(), b"binary/encrypted".to_vec());
        expected.insert(metadata_keys::ENCRYPTION_KEY_ID.to_string(), b"k1".to_vec());
        assert_eq!(encoded[0].metadata, expected);
        assert!(encoded[0].data.len() >= MIN_SEALED_LEN);

        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn three_payloads_roundtrip_in_order() {
        for compress in [true, false] {
            let codec = codec(compress);
            let input = sample_payloads();

            let encoded = codec.encode(&input).unwrap();
            assert_eq!(encoded.len(), input.len());

            let decoded = codec.decode(&encoded).unwrap();
            assert_eq!(decoded, input, "compress={compress}");
        }
    }

    #[test]
    fn empty_batch_and_empty_payload() {
        let codec = codec(true);
        assert!(codec.encode(&[]).unwrap().is_empty());
        assert!(codec.decode(&[]).unwrap().is_empty());

        let input = vec![Payload::default()];
        let decoded = codec.decode(&codec.encode(&input).unwrap()).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn original_metadata_is_hidden() {
        let codec = codec(false);
        let input = vec![Payload::new(b"secret".to_vec()).with_metadata("content-type", "text/plain")];

        let encoded = codec.encode(&input).unwrap();
        assert_eq!(encoded[0].metadata.len(), 2);
        assert!(!encoded[0].metadata.contains_key("content-type"));
        assert!(!encoded[0]
            .data
            .windows(b"secret".len())
            .any(|w| w == b"secret"));
    }

    #[test]
    fn encode_does_not_touch_input() {
        let codec = codec(true);
        let input = sample_payloads();
        let snapshot = input.clone();
        let _ = codec.encode(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    // --- Pass-through ---

    #[test]
    fn decode_passes_through_foreign_payloads() {
        let codec = codec(true);
        let foreign = vec![
            Payload::new(b"plain".to_vec()),
            Payload::new(b"{}".to_vec()).with_metadata("encoding", "json/plain"),
            // Close, but not exactly the tag.
            Payload::new(b"x".to_vec()).with_metadata("encoding", "binary/encrypted ")
                .with_metadata(metadata_keys::ENCRYPTION_KEY_ID, "k1"),
        ];

        assert_eq!(codec.decode(&foreign).unwrap(), foreign);
    }

    #[test]
    fn decode_handles_mixed_streams() {
        let codec = codec(true);
        let plain = Payload::new(b"plain".to_vec()).with_metadata("encoding", "json/plain");
        let secret = Payload::new(b"secret".to_vec());

        let sealed = codec.encode(std::slice::from_ref(&secret)).unwrap().remove(0);
        let mixed = vec![plain.clone(), sealed, plain.clone()];

        assert_eq!(codec.decode(&mixed).unwrap(), vec![plain.clone(), secret, plain]);
    }

    // --- Key handling ---

    #[test]
    fn unknown_key_id_is_rejected() {
        let encoder = EncryptionCodec::new("k2", &other_key()).unwrap();
        let decoder = codec(true);

        let encoded = encoder.encode(&sample_payloads()).unwrap();
        match decoder.decode(&encoded) {
            Err(CodecError::KeyNotRecognized { key_id }) => assert_eq!(key_id, "k2"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_key_id_is_rejected() {
        let codec = codec(true);
        let mut encoded = codec.encode(&sample_payloads()).unwrap();
        encoded[1].metadata.remove(metadata_keys::ENCRYPTION_KEY_ID);

        match codec.decode(&encoded) {
            Err(CodecError::KeyNotRecognized { key_id }) => assert_eq!(key_id, ""),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn wrong_key_under_known_id_fails_authentication() {
        let encoder = EncryptionCodec::new("k1", &other_key()).unwrap();
        let decoder = codec(true);

        let encoded = encoder.encode(&sample_payloads()).unwrap();
        assert!(matches!(decoder.decode(&encoded), Err(CodecError::DecryptionFailed(_))));
    }

    #[test]
    fn rotated_codec_still_decodes_old_key() {
        let old = EncryptionCodec::new("2024-01", &dummy_key()).unwrap();
        let rotated = EncryptionCodec::builder("2024-06")
            .key("2024-06", &other_key())
            .key("2024-01", &dummy_key())
            .build()
            .unwrap();

        let input = sample_payloads();
        let from_old = old.encode(&input).unwrap();
        assert_eq!(rotated.decode(&from_old).unwrap(), input);

        let from_rotated = rotated.encode(&input).unwrap();
        for p in &from_rotated {
            assert_eq!(p.metadata_str(metadata_keys::ENCRYPTION_KEY_ID), Some("2024-06"));
        }
        assert!(matches!(
            old.decode(&from_rotated),
            Err(CodecError::KeyNotRecognized { .. })
        ));
    }

    // --- Tamper detection ---

    #[test]
    fn every_single_bit_flip_is_detected() {
        let codec = codec(true);
        let encoded = codec.encode(&[Payload::new(b"hello".to_vec())]).unwrap();
        let original = encoded[0].data.clone();

        for byte in 0..original.len() {
            for bit in 0..8 {
                let mut tampered = encoded.clone();
                tampered[0].data[byte] ^= 1 << bit;
                assert!(
                    matches!(codec.decode(&tampered), Err(CodecError::DecryptionFailed(_))),
                    "flip at byte {byte} bit {bit} was not detected"
                );
            }
        }
    }

    #[test]
    fn truncated_data_fails_authentication() {
        let codec = codec(false);
        let encoded = codec.encode(&[Payload::new(b"hello".to_vec())]).unwrap();

        for len in [0, NONCE_LEN_12, MIN_SEALED_LEN - 1, encoded[0].data.len() - 1] {
            let mut truncated = encoded.clone();
            truncated[0].data.truncate(len);
            assert!(matches!(codec.decode(&truncated), Err(CodecError::DecryptionFailed(_))));
        }
    }

    // --- Nonce uniqueness ---

    #[test]
    fn nonces_do_not_repeat() {
        let codec = codec(false);
        let input = [Payload::new(b"same".to_vec())];

        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let encoded = codec.encode(&input).unwrap();
            let nonce: [u8; NONCE_LEN_12] = encoded[0].data[..NONCE_LEN_12].try_into().unwrap();
            assert!(seen.insert(nonce), "nonce reused");
        }
    }

    // --- Compression toggle ---

    #[test]
    fn uncompressed_payloads_fail_on_compressing_decoder() {
        let encoded = codec(false).encode(&sample_payloads()).unwrap();
        assert!(matches!(codec(true).decode(&encoded), Err(CodecError::CorruptPayload(_))));
    }

    #[test]
    fn compressed_payloads_fail_on_plain_decoder() {
        let encoded = codec(true).encode(&sample_payloads()).unwrap();
        assert!(matches!(codec(false).decode(&encoded), Err(CodecError::CorruptPayload(_))));
    }

    #[test]
    fn compression_shrinks_repetitive_records() {
        let input = vec![Payload::new(vec![b'a'; 4096])];
        let compressed = codec(true).encode(&input).unwrap();
        let plain = codec(false).encode(&input).unwrap();
        assert!(compressed[0].data.len() < plain[0].data.len());
    }

    // --- Fixture configuration ---

    #[test]
    fn testing_codec_defaults() {
        let codec = EncryptionCodec::for_testing();
        assert_eq!(codec.key_id(), "test");
        assert!(codec.compress());

        let input = sample_payloads();
        assert_eq!(codec.decode(&codec.encode(&input).unwrap()).unwrap(), input);
    }

    // --- Construction ---

    #[test]
    fn builder_requires_active_key() {
        let result = EncryptionCodec::builder("k1").key("k0", &dummy_key()).build();
        assert!(matches!(result, Err(CodecError::Config(_))));
    }

    #[test]
    fn builder_rejects_short_key() {
        let result = EncryptionCodec::new("k1", &[0x11u8; 16]);
        assert!(matches!(result, Err(CodecError::InvalidKey(_))));
    }

    #[test]
    fn builder_accepts_hex_keys() {
        let hex_key = "11".repeat(32);
        let from_hex = EncryptionCodec::builder("k1").hex_key("k1", hex_key).build().unwrap();

        let encoded = codec(true).encode(&sample_payloads()).unwrap();
        assert_eq!(from_hex.decode(&encoded).unwrap(), sample_payloads());
    }

    #[test]
    fn debug_output_has_no_key_material() {
        let rendered = format!("{:?}", codec(true));
        assert!(rendered.contains("k1"));
        assert!(!rendered.contains("17, 17"));
        assert!(!rendered.to_lowercase().contains(&"11".repeat(8)));
    }

    // --- Telemetry ---

    #[test]
    fn counters_track_batches() {
        let codec = codec(true);
        let mut enc = CodecCounters::default();
        let mut dec = CodecCounters::default();

        let encoded = codec.encode_with_counters(&sample_payloads(), &mut enc).unwrap();
        assert_eq!(enc.payloads_encoded, 3);
        assert_eq!(enc.bytes_sealed, encoded.iter().map(|p| p.data.len() as u64).sum::<u64>());

        let mut batch = encoded.clone();
        batch.push(Payload::new(b"plain".to_vec()));
        codec.decode_with_counters(&batch, &mut dec).unwrap();
        assert_eq!(dec.payloads_decoded, 3);
        assert_eq!(dec.payloads_passed_through, 1);
        assert_eq!(dec.bytes_record, enc.bytes_record);
        assert_eq!(dec.bytes_compressed, enc.bytes_compressed);
    }

    // --- Concurrency ---

    #[test]
    fn shared_codec_across_threads() {
        let codec = codec(true);
        let input = sample_payloads();

        crossbeam::scope(|s| {
            for _ in 0..8 {
                s.spawn(|_| {
                    for _ in 0..50 {
                        let encoded = codec.encode(&input).unwrap();
                        assert_eq!(codec.decode(&encoded).unwrap(), input);
                    }
                });
            }
        })
        .unwrap();
    }

    #[test]
    fn codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EncryptionCodec>();
    }

    #[test]
    fn encoded_tag_constant_matches_wire() {
        let encoded = codec(true).encode(&sample_payloads()).unwrap();
        for p in &encoded {
            assert!(p.has_encoding(encodings::BINARY_ENCRYPTED));
        }
    }
}
