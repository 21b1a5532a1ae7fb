//! converter.rs
//! Value <-> payload conversion, and the data converter that runs a codec
//! over converted payloads.
//!
//! Encodings:
//! - `json/plain`   serde_json bytes of the value
//! - `binary/null`  JSON `null`, empty data
//! - `binary/plain` raw bytes, only via [`PayloadConverter::to_binary_payload`]

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::PayloadCodec;
use crate::constants::{encodings, metadata_keys};
use crate::payload::Payload;
use crate::types::CodecError;

#[derive(Clone, Copy, Debug, Default)]
pub struct PayloadConverter;

impl PayloadConverter {
    pub fn to_payload<T: Serialize + ?Sized>(&self, value: &T) -> Result<Payload, CodecError> {
        let json = serde_json::to_value(value)?;
        if json.is_null() {
            return Ok(Payload::new(Vec::new()).with_metadata(metadata_keys::ENCODING, encodings::BINARY_NULL));
        }
        let data = serde_json::to_vec(&json)?;
        Ok(Payload::new(data).with_metadata(metadata_keys::ENCODING, encodings::JSON_PLAIN))
    }

    pub fn to_binary_payload(&self, bytes: &[u8]) -> Payload {
        Payload::new(bytes).with_metadata(metadata_keys::ENCODING, encodings::BINARY_PLAIN)
    }

    pub fn from_payload<T: DeserializeOwned>(&self, payload: &Payload) -> Result<T, CodecError> {
        match payload.encoding() {
            Some(encodings::JSON_PLAIN) => Ok(serde_json::from_slice(&payload.data)?),
            Some(encodings::BINARY_NULL) => Ok(serde_json::from_value(serde_json::Value::Null)?),
            Some(encodings::BINARY_PLAIN) => Ok(serde_json::from_value(serde_json::Value::from(payload.data.clone()))?),
            Some(other) => Err(CodecError::Conversion(format!("unsupported encoding {other:?}"))),
            None => Err(CodecError::Conversion("payload has no encoding".into())),
        }
    }
}

/// Converter plus codec: what a client or worker installs at its boundary.
pub struct DataConverter<C> {
    converter: PayloadConverter,
    codec: C,
}

impl<C: PayloadCodec> DataConverter<C> {
    pub fn new(codec: C) -> Self {
        Self { converter: PayloadConverter, codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Convert a value and run it through the codec.
    pub fn to_payloads<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<Payload>, CodecError> {
        let payload = self.converter.to_payload(value)?;
        self.codec.encode(std::slice::from_ref(&payload))
    }

    /// Decode through the codec and convert the first payload.
    pub fn from_payloads<T: DeserializeOwned>(&self, payloads: &[Payload]) -> Result<T, CodecError> {
        let decoded = self.codec.decode(payloads)?;
        let first = decoded
            .first()
            .ok_or_else(|| CodecError::Conversion("no payloads to convert".into()))?;
        self.converter.from_payload(first)
    }
}
