// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Random 96-bit nonce generation.
//!
//! Security notes:
//! - Every seal draws a fresh nonce from the OS CSPRNG. Under random nonces
//!   AES-GCM stays safe for roughly 2^32 messages per key.
//! - A failing random source is fatal for the call; it is surfaced to the
//!   caller and never retried or replaced by a weaker generator.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::NONCE_LEN_12;
use crate::crypto::types::CryptoError;

/// Draw a 12-byte nonce from the operating system.
#[inline]
pub fn random_nonce_12() -> Result<[u8; NONCE_LEN_12], CryptoError> {
    let mut nonce = [0u8; NONCE_LEN_12];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(nonce)
}
