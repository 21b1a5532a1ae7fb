//! Deflate (zlib wrapper) via flate2.
//!
//! Each record is its own zlib stream. The zlib trailer carries an Adler-32
//! of the original bytes, so truncation and bit rot surface as errors here.

use std::io::{Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};

use crate::compression::types::CompressionError;
use crate::constants::{DEFAULT_LEVEL_ZLIB, MAX_DECOMPRESSED_LEN};

const CODEC: &str = "deflate";

fn process_failed(e: std::io::Error) -> CompressionError {
    CompressionError::CodecProcessFailed { codec: CODEC, msg: e.to_string() }
}

/// Compress `input` at the default level.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress_with_level(input, DEFAULT_LEVEL_ZLIB)
}

/// Compress `input`; levels above 9 fall back to the default.
pub fn compress_with_level(input: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    let lvl = match level {
        0..=9 => Compression::new(level),
        _ => Compression::default(),
    };
    let mut enc = ZlibEncoder::new(Vec::with_capacity(input.len() / 2 + 16), lvl);
    enc.write_all(input).map_err(process_failed)?;
    enc.finish().map_err(process_failed)
}

/// Decompress one zlib stream, capped at `MAX_DECOMPRESSED_LEN`.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress_bounded(input, MAX_DECOMPRESSED_LEN)
}

/// Decompress one zlib stream, failing once output would exceed `max`.
pub fn decompress_bounded(input: &[u8], max: usize) -> Result<Vec<u8>, CompressionError> {
    // A zlib stream is never empty (2-byte header + 4-byte trailer at least).
    if input.is_empty() {
        return Err(CompressionError::EmptyInput);
    }

    let mut out = Vec::new();
    let limit = (max as u64).saturating_add(1);
    ZlibDecoder::new(input)
        .take(limit)
        .read_to_end(&mut out)
        .map_err(process_failed)?;

    if out.len() > max {
        return Err(CompressionError::TooLarge { max });
    }
    Ok(out)
}
