//! Text-to-bytes seam.
//!
//! Binary-to-text conversion sometimes starts from a string rather than a
//! byte buffer. The [`TextCodec`] trait is the seam through which that
//! conversion happens; the [`TextEncoding`] impl only delegates to std
//! conversions and deliberately contains no text-encoding algorithms.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Converts between strings and byte buffers.
pub trait TextCodec {
    fn to_bytes(&self, text: &str) -> Result<Vec<u8>, CodecError>;
    fn from_bytes(&self, bytes: &[u8]) -> Result<String, CodecError>;
}

/// Std-backed text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    /// Strict 7-bit ASCII; out-of-range characters are rejected.
    Ascii,
    /// ISO 8859-1: code points 0..=255 map directly to bytes.
    Latin1,
}

impl TextCodec for TextEncoding {
    fn to_bytes(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16Le => Ok(text
                .encode_utf16()
                .flat_map(|u| u.to_le_bytes())
                .collect()),
            Self::Utf16Be => Ok(text
                .encode_utf16()
                .flat_map(|u| u.to_be_bytes())
                .collect()),
            Self::Ascii => {
                if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
                    return Err(CodecError::InvalidText(format!(
                        "'{c}' is not an ASCII character"
                    )));
                }
                Ok(text.as_bytes().to_vec())
            }
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        CodecError::InvalidText(format!("'{c}' is outside Latin-1"))
                    })
                })
                .collect(),
        }
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<String, CodecError> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| CodecError::InvalidText(e.to_string())),
            Self::Utf16Le | Self::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(CodecError::InvalidText(format!(
                        "{} bytes is not a whole number of UTF-16 units",
                        bytes.len()
                    )));
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| match self {
                        Self::Utf16Le => u16::from_le_bytes([pair[0], pair[1]]),
                        _ => u16::from_be_bytes([pair[0], pair[1]]),
                    })
                    .collect();
                String::from_utf16(&units).map_err(|e| CodecError::InvalidText(e.to_string()))
            }
            Self::Ascii => {
                if let Some(&b) = bytes.iter().find(|&&b| b > 0x7F) {
                    return Err(CodecError::InvalidText(format!(
                        "byte {b:#04x} is not ASCII"
                    )));
                }
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
            Self::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}
