/// Metadata keys understood by the codecs.
pub mod metadata_keys {
    pub const ENCODING: &str = "encoding";
    pub const ENCRYPTION_KEY_ID: &str = "encryption-key-id";
}

/// Values of the `encoding` metadata entry.
pub mod encodings {
    /// Marks payloads owned by the encryption codec.
    pub const BINARY_ENCRYPTED: &str = "binary/encrypted";
    pub const BINARY_ZLIB: &str = "binary/zlib";
    pub const JSON_PLAIN: &str = "json/plain";
    pub const BINARY_PLAIN: &str = "binary/plain";
    pub const BINARY_NULL: &str = "binary/null";
}

/// Key id used when the caller does not name one.
pub const DEFAULT_KEY_ID: &str = "default-key-id";

/// Key id of the fixture configuration used by tests and local workers.
pub const TEST_KEY_ID: &str = "test";

/// Fixture key material. Never use outside tests and local development.
pub const TEST_KEY: &[u8; KEY_LEN_32] = b"test-key-test-key-test-key-test!";

/// AES-256 key length (bytes).
pub const KEY_LEN_32: usize = 32;

/// AES-GCM nonce length (bytes).
pub const NONCE_LEN_12: usize = 12;

/// AES-GCM tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Smallest well-formed encrypted blob: nonce plus tag over an empty message.
pub const MIN_SEALED_LEN: usize = NONCE_LEN_12 + TAG_LEN;

/// Upper bound on a decompressed record (64 MiB).
pub const MAX_DECOMPRESSED_LEN: usize = 64 * 1024 * 1024;

/// Default zlib level (balanced).
pub const DEFAULT_LEVEL_ZLIB: u32 = 6;
