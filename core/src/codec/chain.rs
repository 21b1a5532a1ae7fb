//! codec/chain.rs
//! Ordered composition of codecs.
//!
//! The first codec in the chain is the outermost layer on the wire:
//! `encode` runs codecs last-to-first, `decode` runs them first-to-last.

use std::fmt;

use crate::codec::PayloadCodec;
use crate::payload::Payload;
use crate::types::CodecError;

#[derive(Default)]
pub struct CodecChain {
    codecs: Vec<Box<dyn PayloadCodec>>,
}

impl CodecChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a codec; it sits inside every codec already in the chain.
    pub fn with(mut self, codec: impl PayloadCodec + 'static) -> Self {
        self.codecs.push(Box::new(codec));
        self
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl fmt::Debug for CodecChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecChain").field("len", &self.codecs.len()).finish()
    }
}

impl PayloadCodec for CodecChain {
    fn encode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        let mut current = payloads.to_vec();
        for codec in self.codecs.iter().rev() {
            current = codec.encode(&current)?;
        }
        Ok(current)
    }

    fn decode(&self, payloads: &[Payload]) -> Result<Vec<Payload>, CodecError> {
        let mut current = payloads.to_vec();
        for codec in &self.codecs {
            current = codec.decode(&current)?;
        }
        Ok(current)
    }
}
