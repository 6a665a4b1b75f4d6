//! Conversion engines and the dispatching facade.
//!
//! [`PositionalCodec`] and [`BlockBitCodec`] are the two strategies; the
//! free [`encode`]/[`decode`] functions dispatch on the [`Strategy`] tag
//! the alphabet was constructed with.

mod block;
mod positional;

pub use block::BlockBitCodec;
pub use positional::PositionalCodec;

use crate::alphabet::{AlphabetSpec, Strategy};
use crate::error::CodecError;
use crate::text::{TextCodec, TextEncoding};

/// Core contract both conversion strategies follow.
///
/// An implementation must turn arbitrary bytes into text over its alphabet
/// and back, losslessly, failing with a typed error on malformed text rather
/// than returning partial data.
pub trait Codec {
    fn encode(&self, bytes: &[u8]) -> Result<String, CodecError>;
    fn decode(&self, text: &str) -> Result<Vec<u8>, CodecError>;
}

/// An alphabet bound to its conversion engine.
///
/// `AlphabetSpec` carries the strategy tag; binding it here gives a
/// self-contained object implementing [`Codec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundCodec {
    alphabet: AlphabetSpec,
}

impl BoundCodec {
    pub fn new(alphabet: AlphabetSpec) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &AlphabetSpec {
        &self.alphabet
    }
}

impl Codec for BoundCodec {
    fn encode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        encode(bytes, &self.alphabet)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        decode(text, &self.alphabet)
    }
}

/// Encode bytes under the given alphabet, dispatching on its strategy tag.
pub fn encode(bytes: &[u8], alphabet: &AlphabetSpec) -> Result<String, CodecError> {
    match alphabet.strategy() {
        Strategy::Positional => PositionalCodec::encode(bytes, alphabet),
        Strategy::Block => BlockBitCodec::encode(bytes, alphabet),
    }
}

/// Decode text under the given alphabet, dispatching on its strategy tag.
pub fn decode(text: &str, alphabet: &AlphabetSpec) -> Result<Vec<u8>, CodecError> {
    match alphabet.strategy() {
        Strategy::Positional => PositionalCodec::decode(text, alphabet),
        Strategy::Block => BlockBitCodec::decode(text, alphabet),
    }
}

/// Encode a string by first converting it to bytes under `encoding`.
///
/// Text conversion goes through the [`TextCodec`] seam; this function adds
/// no text-encoding logic of its own.
pub fn encode_text(
    text: &str,
    encoding: TextEncoding,
    alphabet: &AlphabetSpec,
) -> Result<String, CodecError> {
    let bytes = encoding.to_bytes(text)?;
    encode(&bytes, alphabet)
}

/// Decode text and interpret the resulting bytes under `encoding`.
pub fn decode_text(
    text: &str,
    encoding: TextEncoding,
    alphabet: &AlphabetSpec,
) -> Result<String, CodecError> {
    let bytes = decode(text, alphabet)?;
    encoding.from_bytes(&bytes)
}
