//! compression/mod.rs
//! Record compression applied before encryption.
//!
//! Notes:
//! - Compression always happens on plaintext, never on ciphertext.
//! - Decompression is bounded so a hostile stream cannot exhaust memory.

pub mod types;
pub mod deflate;

pub use types::*;
pub use deflate::*;
