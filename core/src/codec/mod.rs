//! Payload codecs.
//!
//! Responsibilities:
//! - Transform ordered payload batches before send and after receive
//! - Preserve length and order of every batch
//!
//! Non-responsibilities:
//! - Value conversion (see `converter`)
//! - Key acquisition or rotation scheduling

pub mod chain;
pub mod encryption;
pub mod zlib;

pub use chain::CodecChain;
pub use encryption::{EncryptionCodec, EncryptionCodecBuilder};
pub use zlib::ZlibCodec;

use crate::payload::Payload;
use crate::types::CodecError;

/// A symmetric transform over payload batches.
///
/// Implementations hold only immutable configuration, so a single instance
/// may be shared across threads and called concurrently.
pub trait PayloadCodec: Send + Sync {
    /// Transform outgoing payloads. Output has the input's length and order.
    fn encode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError>;

    /// Restore incoming payloads. Output has the input's length and order.
    fn decode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError>;
}

impl<C: PayloadCodec + ?Sized> PayloadCodec for Box<C> {
    fn encode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        (**self).encode(payloads)
    }

    fn decode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        (**self).decode(payloads)
    }
}

impl<C: PayloadCodec + ?Sized> PayloadCodec for std::sync::Arc<C> {
    fn encode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        (**self).encode(payloads)
    }

    fn decode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        (**self).decode(payloads)
    }
}
