use thiserror::Error;

/// Error type for alphabet construction and encode/decode operations.
///
/// Construction failures (`DuplicateSymbol`, `InsufficientRadix`,
/// `InvalidAlias`) are permanent: the alphabet definition itself is wrong.
/// Decode failures are permanent for the given input; the engine never
/// retries or returns a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the alphabet was found while decoding.
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The input length is incompatible with the alphabet's block or radix
    /// constraints (e.g. an odd-length base16 string).
    #[error("invalid input length {length}: {reason}")]
    InvalidLength { length: usize, reason: String },

    /// Wrong padding count or position, or leftover bits that are not zero.
    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// The same character appears twice in an alphabet definition.
    #[error("duplicate symbol '{0}' in alphabet")]
    DuplicateSymbol(char),

    /// An alphabet needs at least two symbols.
    #[error("alphabet requires at least 2 symbols, got {0}")]
    InsufficientRadix(usize),

    /// A symbol referenced by alphabet configuration is not in the alphabet.
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(char),

    /// An alias registration was rejected.
    #[error("invalid alias '{symbol}': {reason}")]
    InvalidAlias { symbol: char, reason: String },

    /// Text could not be converted to or from bytes under the requested
    /// text encoding.
    #[error("text conversion failed: {0}")]
    InvalidText(String),
}
