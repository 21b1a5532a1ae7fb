//! payload.rs
//! The payload record and its canonical byte encoding.
//!
//! Design notes:
//! - `Payload` is wire-compatible with `temporal.api.common.v1.Payload`
//!   (field 1: `map<string, bytes> metadata`, field 2: `bytes data`), so
//!   records sealed here open in any SDK that speaks the same message.
//! - Metadata lives in a `BTreeMap`; encoding is deterministic.
//! - Decoding is strict: only fields 1 and 2 are accepted.

use std::collections::BTreeMap;

use prost::bytes::Buf;
use prost::encoding::{decode_key, skip_field, DecodeContext};
use prost::Message;
use thiserror::Error;

use crate::constants::metadata_keys;

/// Opaque data record exchanged between sender and receiver.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct Payload {
    #[prost(btree_map = "string, bytes", tag = "1")]
    pub metadata: BTreeMap<String, Vec<u8>>,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

impl Payload {
    const METADATA_TAG: u32 = 1;
    const DATA_TAG: u32 = 2;

    /// Payload with no metadata.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { metadata: BTreeMap::new(), data: data.into() }
    }

    /// Builder-style metadata insert.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Raw metadata value.
    pub fn metadata_bytes(&self, key: &str) -> Option<&[u8]> {
        self.metadata.get(key).map(Vec::as_slice)
    }

    /// Metadata value as UTF-8; `None` when absent or not valid UTF-8.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata_bytes(key).and_then(|v| std::str::from_utf8(v).ok())
    }

    /// The `encoding` tag, if any.
    pub fn encoding(&self) -> Option<&str> {
        self.metadata_str(metadata_keys::ENCODING)
    }

    /// True when `encoding` equals `expected` byte-for-byte.
    pub fn has_encoding(&self, expected: &str) -> bool {
        self.metadata_bytes(metadata_keys::ENCODING) == Some(expected.as_bytes())
    }
}

#[derive(Debug, Error)]
pub enum WireError {
    #[error("unexpected field {0} in payload record")]
    UnknownField(u32),

    #[error("malformed payload record: {0}")]
    Malformed(#[from] prost::DecodeError),
}

/// Serialize a payload record to its canonical bytes.
pub fn encode_record(payload: &Payload) -> Vec<u8> {
    payload.encode_to_vec()
}

/// Parse a payload record, rejecting anything but metadata and data fields.
pub fn decode_record(bytes: &[u8]) -> Result<Payload, WireError> {
    ensure_known_fields(bytes)?;
    Ok(Payload::decode(bytes)?)
}

fn ensure_known_fields(mut buf: &[u8]) -> Result<(), WireError> {
    while buf.has_remaining() {
        let (tag, wire_type) = decode_key(&mut buf)?;
        if tag != Payload::METADATA_TAG && tag != Payload::DATA_TAG {
            return Err(WireError::UnknownField(tag));
        }
        skip_field(wire_type, tag, &mut buf, DecodeContext::default())?;
    }
    Ok(())
}
