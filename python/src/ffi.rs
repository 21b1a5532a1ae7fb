//! PyO3 surface: the `EncryptionCodec` class and its exception types.

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use payload_codec::codec::{EncryptionCodec, PayloadCodec};
use payload_codec::payload::{decode_record, encode_record, Payload};
use payload_codec::types::CodecError;

create_exception!(payload_codec_py, KeyNotRecognizedError, PyValueError);
create_exception!(payload_codec_py, DecryptionFailedError, PyValueError);
create_exception!(payload_codec_py, CorruptPayloadError, PyValueError);

fn to_py_err(e: CodecError) -> PyErr {
    match &e {
        CodecError::KeyNotRecognized { .. } => KeyNotRecognizedError::new_err(e.to_string()),
        CodecError::DecryptionFailed(_) => DecryptionFailedError::new_err(e.to_string()),
        CodecError::CorruptPayload(_) => CorruptPayloadError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn parse_records(records: &[Bound<'_, PyBytes>]) -> PyResult<Vec<Payload>> {
    records
        .iter()
        .map(|r| decode_record(r.as_bytes()).map_err(|e| PyValueError::new_err(e.to_string())))
        .collect()
}

fn to_py_records<'py>(py: Python<'py>, payloads: &[Payload]) -> Vec<Bound<'py, PyBytes>> {
    payloads
        .iter()
        .map(|p| PyBytes::new_bound(py, &encode_record(p)))
        .collect()
}

/// AES-256-GCM payload codec over serialized `Payload` records.
#[pyclass(name = "EncryptionCodec", module = "payload_codec_py", frozen)]
pub struct PyEncryptionCodec {
    inner: EncryptionCodec,
}

#[pymethods]
impl PyEncryptionCodec {
    #[new]
    #[pyo3(signature = (key_id, key, compress = true))]
    fn new(key_id: String, key: &[u8], compress: bool) -> PyResult<Self> {
        let inner = EncryptionCodec::builder(key_id.clone())
            .key(key_id, key)
            .compress(compress)
            .build()
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Fixture codec (key id `test`, fixed key, compression on).
    #[staticmethod]
    fn for_testing() -> Self {
        Self { inner: EncryptionCodec::for_testing() }
    }

    #[getter]
    fn key_id(&self) -> String {
        self.inner.key_id().to_string()
    }

    #[getter]
    fn compress(&self) -> bool {
        self.inner.compress()
    }

    fn encode<'py>(
        &self,
        py: Python<'py>,
        records: Vec<Bound<'py, PyBytes>>,
    ) -> PyResult<Vec<Bound<'py, PyBytes>>> {
        let payloads = parse_records(&records)?;
        let encoded = py
            .allow_threads(|| self.inner.encode(&payloads))
            .map_err(to_py_err)?;
        tracing::trace!(count = encoded.len(), "python encode");
        Ok(to_py_records(py, &encoded))
    }

    fn decode<'py>(
        &self,
        py: Python<'py>,
        records: Vec<Bound<'py, PyBytes>>,
    ) -> PyResult<Vec<Bound<'py, PyBytes>>> {
        let payloads = parse_records(&records)?;
        let decoded = py
            .allow_threads(|| self.inner.decode(&payloads))
            .map_err(to_py_err)?;
        tracing::trace!(count = decoded.len(), "python decode");
        Ok(to_py_records(py, &decoded))
    }

    fn __repr__(&self) -> String {
        format!(
            "EncryptionCodec(key_id={:?}, compress={})",
            self.inner.key_id(),
            if self.inner.compress() { "True" } else { "False" }
        )
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_class::<PyEncryptionCodec>()?;
    m.add("KeyNotRecognizedError", py.get_type_bound::<KeyNotRecognizedError>())?;
    m.add("DecryptionFailedError", py.get_type_bound::<DecryptionFailedError>())?;
    m.add("CorruptPayloadError", py.get_type_bound::<CorruptPayloadError>())?;
    Ok(())
}
