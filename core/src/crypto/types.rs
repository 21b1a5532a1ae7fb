// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Key material was not valid hex.
    #[error("invalid hex key: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Sealed blob shorter than nonce plus tag.
    #[error("sealed data truncated: {actual} bytes, need at least {min}")]
    Truncated { min: usize, actual: usize },

    /// AEAD tag mismatch (authentication failure).
    #[error("AEAD tag mismatch")]
    TagMismatch,

    /// AEAD seal failed.
    #[error("AES-GCM seal failed")]
    SealFailed,

    /// OS random source could not produce a nonce.
    #[error("random source failure: {0}")]
    RandomSource(String),
}
