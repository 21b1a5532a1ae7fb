//! telemetry/mod.rs
//! Per-call counters for codec traffic.
//!
//! Notes:
//! - Compression ratio (`bytes_compressed / bytes_record`) shows whether the
//!   compress flag pays off for a given workload.
//! - Counters are plain values; callers aggregate them however they like.

pub mod counters;

pub use counters::*;
