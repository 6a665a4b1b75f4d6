//! radix-codec: binary-to-text conversion for arbitrary alphabets.
//!
//! This library provides two generic conversion engines, arbitrary-radix
//! positional big-number conversion and fixed-ratio bit-group conversion,
//! behind a shared alphabet abstraction and a strategy-dispatch facade.

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod text;

// Re-export commonly used types for convenient external access.
//
// These form the public, stable surface most consumers will use: pick a
// standard alphabet (or build an `AlphabetSpec`), then call `encode`/`decode`
// or wrap the alphabet in a `BoundCodec`.
pub use alphabet::{standard, AlphabetSpec, GroupShape, Strategy};
pub use codec::{
    decode, decode_text, encode, encode_text, BlockBitCodec, BoundCodec, Codec, PositionalCodec,
};
pub use error::CodecError;
pub use text::{TextCodec, TextEncoding};
