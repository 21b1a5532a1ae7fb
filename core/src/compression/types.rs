use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    #[error("decompressed size exceeds {max} bytes")]
    TooLarge { max: usize },

    #[error("empty compressed input")]
    EmptyInput,
}
