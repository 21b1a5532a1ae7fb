// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! AES-256-GCM seal/open over the `nonce || ciphertext || tag` layout.
//!
//! Design notes:
//! - 32-byte keys, 12-byte random nonces, 16-byte tags.
//! - No associated data is bound; the layout is shared with other SDKs that
//!   use the same scheme.
//! - Tag verification must fail closed (no partial plaintext).

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Nonce};

use crate::constants::{MIN_SEALED_LEN, NONCE_LEN_12};
use crate::crypto::nonce::random_nonce_12;
use crate::crypto::types::CryptoError;

/// Encrypt `plaintext` under a fresh nonce.
///
/// Layout:
///
/// ```text
/// [ nonce (12) ][ ciphertext (N) ][ tag (16) ]
/// ```
pub fn seal(cipher: &Aes256Gcm, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let nonce = random_nonce_12()?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| CryptoError::SealFailed)?;

    let mut out = Vec::with_capacity(NONCE_LEN_12 + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt a blob produced by [`seal`].
pub fn open(cipher: &Aes256Gcm, sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if sealed.len() < MIN_SEALED_LEN {
        return Err(CryptoError::Truncated { min: MIN_SEALED_LEN, actual: sealed.len() });
    }

    let (nonce, ciphertext_and_tag) = sealed.split_at(NONCE_LEN_12);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext_and_tag)
        .map_err(|_| CryptoError::TagMismatch)
}
