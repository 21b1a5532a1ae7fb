//! payload-codec
//!
//! Pure Rust payload encryption codec.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Records and primitives
pub mod payload;
pub mod compression;
pub mod crypto;
pub mod telemetry;

// Codecs and conversion
pub mod codec;
pub mod converter;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{CodecChain, EncryptionCodec, PayloadCodec, ZlibCodec};
    pub use crate::config::CodecConfig;
    pub use crate::converter::{DataConverter, PayloadConverter};
    pub use crate::payload::Payload;
    pub use crate::telemetry::CodecCounters;
    pub use crate::types::CodecError;
}
