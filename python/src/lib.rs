//! payload-codec-python
//!
//! Python bindings for payload-codec (PyO3).
//!
//! Records cross the boundary as serialized `Payload` protobuf bytes, so a
//! Python `PayloadCodec` only needs `SerializeToString` / `FromString`:
//!
//! ```python
//! from payload_codec_py import EncryptionCodec
//!
//! codec = EncryptionCodec("default-key-id", key, compress=False)
//! sealed = codec.encode([p.SerializeToString() for p in payloads])
//! payloads = [Payload.FromString(b) for b in sealed]
//! ```

use pyo3::prelude::*;

mod ffi;

/// Python module entry point
#[pymodule]
fn payload_codec_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)?;
    Ok(())
}
