pub mod types;
pub mod aead;
pub mod keys;
pub mod nonce;

pub use types::*;
pub use aead::*;
pub use keys::*;
pub use nonce::*;
