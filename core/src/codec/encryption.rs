//! codec/encryption.rs
//! AES-256-GCM payload encryption codec.
//!
//! Encode, per payload:
//!
//! ```text
//! record  = encode_record(payload)          // whole record, metadata included
//! body    = compress ? zlib(record) : record
//! data    = nonce(12) || AES-GCM(key, nonce, body) || tag(16)
//! output  = Payload { metadata: { encoding: "binary/encrypted",
//!                                 encryption-key-id: <active key id> },
//!                     data }
//! ```
//!
//! Decode reverses the steps for payloads tagged `binary/encrypted` and passes
//! every other payload through untouched. Both ends of a channel must agree on
//! the compress flag.

use aes_gcm::aead::KeyInit;
use aes_gcm::{Aes256Gcm, Key};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::codec::PayloadCodec;
use crate::compression;
use crate::constants::{encodings, metadata_keys, DEFAULT_KEY_ID, TEST_KEY, TEST_KEY_ID};
use crate::crypto::{self, key_from_hex, KeyTable};
use crate::payload::{decode_record, encode_record, Payload};
use crate::telemetry::CodecCounters;
use crate::types::CodecError;

/// Encryption codec with one active key and any number of decode-only keys.
#[derive(Clone, Debug)]
pub struct EncryptionCodec {
    key_id: String,
    keys: KeyTable,
    compress: bool,
}

impl EncryptionCodec {
    /// Single-key codec with compression enabled.
    pub fn new(key_id: impl Into<String>, key: &[u8]) -> Result<Self, CodecError> {
        let key_id = key_id.into();
        Self::builder(key_id.clone()).key(key_id, key).build()
    }

    /// Single-key codec under [`DEFAULT_KEY_ID`].
    pub fn with_default_key_id(key: &[u8]) -> Result<Self, CodecError> {
        Self::new(DEFAULT_KEY_ID, key)
    }

    /// Start a builder whose active key id is `key_id`.
    pub fn builder(key_id: impl Into<String>) -> EncryptionCodecBuilder {
        EncryptionCodecBuilder {
            key_id: key_id.into(),
            keys: Vec::new(),
            compress: true,
        }
    }

    /// Fixture configuration: key id `test`, fixed key, compression on.
    pub fn for_testing() -> Self {
        let mut keys = KeyTable::new();
        keys.insert_cipher(TEST_KEY_ID, Aes256Gcm::new(&Key::<Aes256Gcm>::from(*TEST_KEY)));
        Self { key_id: TEST_KEY_ID.to_string(), keys, compress: true }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    pub fn keys(&self) -> &KeyTable {
        &self.keys
    }

    /// Encode a batch, accumulating traffic into `counters`.
    pub fn encode_with_counters(
        &self,
        payloads: &[Payload],
        counters: &mut CodecCounters,
    ) -> Result<Vec<Payload>, CodecError> {
        let out = payloads
            .iter()
            .map(|p| self.encode_one(p, counters))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(key_id = %self.key_id, count = out.len(), compress = self.compress, "encoded payloads");
        Ok(out)
    }

    /// Decode a batch, accumulating traffic into `counters`.
    pub fn decode_with_counters(
        &self,
        payloads: &[Payload],
        counters: &mut CodecCounters,
    ) -> Result<Vec<Payload>, CodecError> {
        let out = payloads
            .iter()
            .map(|p| self.decode_one(p, counters))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = out.len(), compress = self.compress, "decoded payloads");
        Ok(out)
    }

    fn encode_one(&self, payload: &Payload, counters: &mut CodecCounters) -> Result<Payload, CodecError> {
        let cipher = self.keys.get(&self.key_id).ok_or_else(|| CodecError::KeyNotRecognized {
            key_id: self.key_id.clone(),
        })?;

        let record = encode_record(payload);
        let record_len = record.len();
        let body = if self.compress {
            compression::compress(&record).map_err(CodecError::Compression)?
        } else {
            record
        };
        let sealed = crypto::seal(cipher, &body).map_err(CodecError::Encryption)?;
        counters.add_encode(record_len, body.len(), sealed.len());

        Ok(Payload::new(sealed)
            .with_metadata(metadata_keys::ENCODING, encodings::BINARY_ENCRYPTED)
            .with_metadata(metadata_keys::ENCRYPTION_KEY_ID, self.key_id.as_bytes()))
    }

    fn decode_one(&self, payload: &Payload, counters: &mut CodecCounters) -> Result<Payload, CodecError> {
        if !payload.has_encoding(encodings::BINARY_ENCRYPTED) {
            counters.add_pass_through();
            return Ok(payload.clone());
        }

        let key_id = payload
            .metadata_bytes(metadata_keys::ENCRYPTION_KEY_ID)
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .unwrap_or_default();
        let Some(cipher) = self.keys.get(&key_id) else {
            warn!(key_id = %key_id, known = ?self.keys, "encrypted payload names an unknown key");
            return Err(CodecError::KeyNotRecognized { key_id });
        };

        let body = crypto::open(cipher, &payload.data).map_err(|e| {
            warn!(key_id = %key_id, error = %e, "payload failed authentication");
            CodecError::DecryptionFailed(e)
        })?;
        let body_len = body.len();
        let record = if self.compress {
            compression::decompress(&body).map_err(CodecError::corrupt_compression)?
        } else {
            body
        };
        let restored = decode_record(&record).map_err(CodecError::corrupt_wire)?;
        counters.add_decode(record.len(), body_len, payload.data.len());

        Ok(restored)
    }
}

impl PayloadCodec for EncryptionCodec {
    fn encode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        self.encode_with_counters(payloads, &mut CodecCounters::default())
    }

    fn decode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        self.decode_with_counters(payloads, &mut CodecCounters::default())
    }
}

/// Builder for [`EncryptionCodec`].
#[derive(Debug)]
pub struct EncryptionCodecBuilder {
    key_id: String,
    keys: Vec<(String, KeySource)>,
    compress: bool,
}

enum KeySource {
    Raw(Zeroizing<Vec<u8>>),
    Hex(Zeroizing<String>),
}

impl std::fmt::Debug for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

impl EncryptionCodecBuilder {
    /// Add raw 32-byte key material under `key_id`.
    pub fn key(mut self, key_id: impl Into<String>, key: &[u8]) -> Self {
        self.keys.push((key_id.into(), KeySource::Raw(Zeroizing::new(key.to_vec()))));
        self
    }

    /// Add hex-encoded key material under `key_id`.
    pub fn hex_key(mut self, key_id: impl Into<String>, hex_key: impl Into<String>) -> Self {
        self.keys.push((key_id.into(), KeySource::Hex(Zeroizing::new(hex_key.into()))));
        self
    }

    /// Toggle compress-before-encrypt (default: on).
    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn build(self) -> Result<EncryptionCodec, CodecError> {
        let mut keys = KeyTable::new();
        for (id, source) in &self.keys {
            let inserted = match source {
                KeySource::Raw(bytes) => keys.insert(id.clone(), bytes),
                KeySource::Hex(text) => key_from_hex(text).and_then(|bytes| keys.insert(id.clone(), &bytes)),
            };
            inserted.map_err(CodecError::InvalidKey)?;
        }

        if !keys.contains(&self.key_id) {
            return Err(CodecError::Config(format!(
                "active key id {:?} has no key material",
                self.key_id
            )));
        }

        Ok(EncryptionCodec { key_id: self.key_id, keys, compress: self.compress })
    }
}
