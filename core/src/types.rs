use thiserror::Error;

use crate::{compression::CompressionError, crypto::CryptoError, payload::WireError};

/// Unified codec error.
///
/// The first three variants are the decode-side taxonomy callers branch on;
/// none of them is retryable and none of them carries partial plaintext.
#[derive(Debug, Error)]
pub enum CodecError {
    /// An encrypted payload names a key id this codec does not hold
    /// (or names none at all).
    #[error("unrecognized key ID {key_id:?}")]
    KeyNotRecognized { key_id: String },

    /// AEAD authentication failed: tampered, truncated or wrong key.
    #[error("decryption failed: {0}")]
    DecryptionFailed(#[source] CryptoError),

    /// Decompression or record deserialization failed after the ciphertext
    /// authenticated.
    #[error("corrupt payload: {0}")]
    CorruptPayload(String),

    /// Encode-side primitive failure (random source, seal).
    #[error("encryption failed: {0}")]
    Encryption(#[source] CryptoError),

    /// Encode-side compression failure.
    #[error("compression failed: {0}")]
    Compression(#[source] CompressionError),

    /// Key material rejected at construction.
    #[error("invalid key: {0}")]
    InvalidKey(#[source] CryptoError),

    /// Inconsistent codec configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Value <-> payload conversion failure.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

impl CodecError {
    pub(crate) fn corrupt_wire(e: WireError) -> Self {
        CodecError::CorruptPayload(e.to_string())
    }

    pub(crate) fn corrupt_compression(e: CompressionError) -> Self {
        CodecError::CorruptPayload(e.to_string())
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::Conversion(e.to_string())
    }
}
