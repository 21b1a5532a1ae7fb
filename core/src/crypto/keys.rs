//! crypto/keys.rs
//! Key table: key id -> AES-256-GCM cipher, with one active id for sealing.
//!
//! Decoding may use any entry, which lets a deployment keep an old key around
//! for in-flight data after switching the active id.

use std::collections::BTreeMap;
use std::fmt;

use aes_gcm::aead::KeyInit;
use aes_gcm::Aes256Gcm;
use zeroize::Zeroizing;

use crate::constants::KEY_LEN_32;
use crate::crypto::types::CryptoError;

/// Build a cipher from raw 32-byte key material.
pub fn cipher_from_key(key: &[u8]) -> Result<Aes256Gcm, CryptoError> {
    if key.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: key.len() });
    }
    Aes256Gcm::new_from_slice(key)
        .map_err(|_| CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: key.len() })
}

/// Decode hex key material. The decoded bytes are wiped when dropped.
pub fn key_from_hex(hex_key: &str) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let bytes = Zeroizing::new(hex::decode(hex_key.trim())?);
    if bytes.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: bytes.len() });
    }
    Ok(bytes)
}

/// Immutable set of named keys.
#[derive(Clone, Default)]
pub struct KeyTable {
    ciphers: BTreeMap<String, Aes256Gcm>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a key under `key_id`.
    pub fn insert(&mut self, key_id: impl Into<String>, key: &[u8]) -> Result<(), CryptoError> {
        let cipher = cipher_from_key(key)?;
        self.ciphers.insert(key_id.into(), cipher);
        Ok(())
    }

    /// Insert an already constructed cipher.
    pub fn insert_cipher(&mut self, key_id: impl Into<String>, cipher: Aes256Gcm) {
        self.ciphers.insert(key_id.into(), cipher);
    }

    pub fn get(&self, key_id: &str) -> Option<&Aes256Gcm> {
        self.ciphers.get(key_id)
    }

    pub fn contains(&self, key_id: &str) -> bool {
        self.ciphers.contains_key(key_id)
    }

    pub fn key_ids(&self) -> impl Iterator<Item = &str> {
        self.ciphers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ciphers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
    }
}

// Key material never reaches logs.
impl fmt::Debug for KeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyTable")
            .field("key_ids", &self.ciphers.keys().collect::<Vec<_>>())
            .finish()
    }
}
