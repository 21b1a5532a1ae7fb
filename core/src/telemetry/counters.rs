//! telemetry/counters.rs
//! Counters collected while encoding and decoding payload batches.
//!
//! The codec never owns these: callers pass a `&mut CodecCounters` per call,
//! and per-thread counters are merged afterwards. No locks, no atomics.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub payloads_encoded: u64,
    pub payloads_decoded: u64,
    pub payloads_passed_through: u64,
    /// Serialized record bytes (before compression / after decompression).
    pub bytes_record: u64,
    /// Bytes handed to the cipher (after compression, if enabled).
    pub bytes_compressed: u64,
    /// Sealed bytes on the wire (nonce + ciphertext + tag).
    pub bytes_sealed: u64,
}

impl CodecCounters {
    /// Record one encoded payload.
    pub fn add_encode(&mut self, record_len: usize, compressed_len: usize, sealed_len: usize) {
        self.payloads_encoded += 1;
        self.bytes_record += record_len as u64;
        self.bytes_compressed += compressed_len as u64;
        self.bytes_sealed += sealed_len as u64;
    }

    /// Record one decoded payload.
    pub fn add_decode(&mut self, record_len: usize, compressed_len: usize, sealed_len: usize) {
        self.payloads_decoded += 1;
        self.bytes_record += record_len as u64;
        self.bytes_compressed += compressed_len as u64;
        self.bytes_sealed += sealed_len as u64;
    }

    /// Record a payload left untouched by decode.
    pub fn add_pass_through(&mut self) {
        self.payloads_passed_through += 1;
    }

    /// `bytes_compressed / bytes_record`, or `None` before any traffic.
    pub fn compression_ratio(&self) -> Option<f64> {
        (self.bytes_record > 0).then(|| self.bytes_compressed as f64 / self.bytes_record as f64)
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.payloads_encoded += other.payloads_encoded;
        self.payloads_decoded += other.payloads_decoded;
        self.payloads_passed_through += other.payloads_passed_through;
        self.bytes_record += other.bytes_record;
        self.bytes_compressed += other.bytes_compressed;
        self.bytes_sealed += other.bytes_sealed;
    }
}

impl AddAssign<&CodecCounters> for CodecCounters {
    fn add_assign(&mut self, rhs: &CodecCounters) {
        self.merge(rhs);
    }
}
