//! codec/zlib.rs
//! Standalone compression codec, tagged `binary/zlib`.
//!
//! Useful when layering compression under a codec that has none of its own.
//! By default a payload is only replaced when compression actually shrinks it.

use crate::codec::PayloadCodec;
use crate::compression;
use crate::constants::{encodings, metadata_keys};
use crate::payload::{decode_record, encode_record, Payload};
use crate::types::CodecError;

#[derive(Clone, Copy, Debug, Default)]
pub struct ZlibCodec {
    always_encode: bool,
}

impl ZlibCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress every payload, even when the result is larger.
    pub fn always_encode() -> Self {
        Self { always_encode: true }
    }

    fn encode_one(&self, payload: &Payload) -> Result<Payload, CodecError> {
        let record = encode_record(payload);
        let compressed = compression::compress(&record).map_err(CodecError::Compression)?;
        if !self.always_encode && compressed.len() >= record.len() {
            return Ok(payload.clone());
        }
        Ok(Payload::new(compressed).with_metadata(metadata_keys::ENCODING, encodings::BINARY_ZLIB))
    }

    fn decode_one(&self, payload: &Payload) -> Result<Payload, CodecError> {
        if !payload.has_encoding(encodings::BINARY_ZLIB) {
            return Ok(payload.clone());
        }
        let record = compression::decompress(&payload.data).map_err(CodecError::corrupt_compression)?;
        decode_record(&record).map_err(CodecError::corrupt_wire)
    }
}

impl PayloadCodec for ZlibCodec {
    fn encode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        payloads.iter().map(|p| self.encode_one(p)).collect()
    }

    fn decode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        payloads.iter().map(|p| self.decode_one(p)).collect()
    }
}
