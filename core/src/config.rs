//! config.rs
//! Serializable codec configuration.
//!
//! ```json
//! {
//!   "key_id": "2024-06",
//!   "keys": { "2024-06": "<64 hex chars>", "2024-01": "<64 hex chars>" },
//!   "compress": true
//! }
//! ```
//!
//! Where the hex strings come from is the caller's business.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::codec::EncryptionCodec;
use crate::constants::{DEFAULT_KEY_ID, TEST_KEY, TEST_KEY_ID};
use crate::types::CodecError;

fn default_compress() -> bool {
    true
}

fn default_key_id() -> String {
    DEFAULT_KEY_ID.to_string()
}

/// Hex-encoded 256-bit key. Redacted in `Debug`, wiped on drop.
#[derive(Clone, Deserialize)]
#[serde(from = "String")]
pub struct HexKey(Zeroizing<String>);

impl From<String> for HexKey {
    fn from(hex: String) -> Self {
        Self(Zeroizing::new(hex))
    }
}

impl HexKey {
    pub fn new(hex: impl Into<String>) -> Self {
        Self::from(hex.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HexKey(<redacted>)")
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Active key id for encoding.
    #[serde(default = "default_key_id")]
    pub key_id: String,

    /// Every key this process may decode with, active one included.
    pub keys: BTreeMap<String, HexKey>,

    /// Compress before encrypting.
    #[serde(default = "default_compress")]
    pub compress: bool,
}

impl CodecConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// One key, compression on.
    pub fn single_key(key_id: impl Into<String>, hex_key: impl Into<String>) -> Self {
        let key_id = key_id.into();
        let mut keys = BTreeMap::new();
        keys.insert(key_id.clone(), HexKey::new(hex_key));
        Self { key_id, keys, compress: default_compress() }
    }

    /// Fixture configuration matching [`EncryptionCodec::for_testing`].
    pub fn testing() -> Self {
        Self::single_key(TEST_KEY_ID, hex::encode(TEST_KEY))
    }

    pub fn build(&self) -> Result<EncryptionCodec, CodecError> {
        self.keys
            .iter()
            .fold(EncryptionCodec::builder(self.key_id.clone()), |b, (id, key)| {
                b.hex_key(id.clone(), key.expose())
            })
            .compress(self.compress)
            .build()
    }
}
