//! Fixed-ratio bit-group conversion.
//!
//! Input bytes stream through a 64-bit accumulator; every `group_bits` of
//! accumulated input becomes one group of `symbols_per_group` output symbols
//! (most significant digit first). Group sizes that do not divide 8 evenly
//! (5, 7, 13 bits) carry bits across iterations in the accumulator rather
//! than going through per-byte tables.
//!
//! Trailing input bits are left-justified into a shortened final group: with
//! `r` bits left over, `ceil(r·s/g)` tail symbols are emitted, carrying the
//! remainder left-justified to `floor(t·g/s)` bits. Decode reverses that and
//! rejects non-zero slack bits, so truncated or corrupted text never decodes
//! to a partial result.

use crate::alphabet::{AlphabetSpec, GroupShape};
use crate::error::CodecError;

/// Bit-grouping engine for alphabets with a fixed bits-to-symbols ratio
/// (base2/8/16/32/64/128, base91, Z85, Ascii85).
pub struct BlockBitCodec;

fn group_shape(alphabet: &AlphabetSpec) -> Result<GroupShape, CodecError> {
    alphabet.group_shape().ok_or(CodecError::InvalidLength {
        length: 0,
        reason: "alphabet has no group geometry; use the positional engine".into(),
    })
}

/// Render `value` as exactly `count` base-R digits, most significant first.
/// Callers guarantee `value < R^count`.
fn push_digits(out: &mut String, value: u64, alphabet: &AlphabetSpec, count: usize) {
    let radix = alphabet.radix() as u64;
    let symbols = alphabet.symbols();
    let mut digits = [0u8; 8];
    let mut v = value;
    for slot in digits[..count].iter_mut().rev() {
        // v % radix < radix, so the index is always in range.
        *slot = (v % radix) as u8;
        v /= radix;
    }
    for &d in &digits[..count] {
        out.push(symbols[d as usize]);
    }
}

impl BlockBitCodec {
    /// Encode bytes as fixed-ratio bit groups.
    ///
    /// Output length is a pure function of input length and the group
    /// geometry, except when a zero-group shorthand collapses all-zero
    /// groups. Alphabets with a padding symbol are filled to the block
    /// boundary; zero-length input yields the empty string, not a padded
    /// empty block.
    pub fn encode(bytes: &[u8], alphabet: &AlphabetSpec) -> Result<String, CodecError> {
        let shape = group_shape(alphabet)?;
        if bytes.is_empty() {
            return Ok(String::new());
        }
        if alphabet.whole_groups_only() && bytes.len() % shape.block_bytes() != 0 {
            return Err(CodecError::InvalidLength {
                length: bytes.len(),
                reason: format!(
                    "input must be a multiple of {} bytes",
                    shape.block_bytes()
                ),
            });
        }

        let g = shape.group_bits;
        let s = shape.symbols_per_group as usize;
        let group_mask = (1u64 << g) - 1;

        let mut out =
            String::with_capacity((bytes.len() * 8 / g as usize + 2) * s + shape.block_symbols());
        let mut acc: u64 = 0;
        let mut bits: u32 = 0;
        let mut emitted = 0usize;

        for &byte in bytes {
            acc = (acc << 8) | u64::from(byte);
            bits += 8;
            while bits >= g {
                bits -= g;
                let group = (acc >> bits) & group_mask;
                match alphabet.zero_group() {
                    Some(shorthand) if group == 0 => out.push(shorthand),
                    _ => push_digits(&mut out, group, alphabet, s),
                }
                emitted += s;
            }
        }

        if bits > 0 {
            // Left-justify the remainder into a shortened final group.
            let t = shape.tail_symbols(bits);
            let tail_bits = shape.tail_bits(t);
            let value = (acc & ((1u64 << bits) - 1)) << (tail_bits - bits);
            push_digits(&mut out, value, alphabet, t);
            emitted += t;
        }

        if let Some(pad) = alphabet.padding() {
            let block = shape.block_symbols();
            while emitted % block != 0 {
                out.push(pad);
                emitted += 1;
            }
        }
        Ok(out)
    }

    /// Decode fixed-ratio bit groups back into bytes.
    ///
    /// Ignored characters are skipped without affecting bit position. For
    /// padding-terminated alphabets the first padding symbol ends the
    /// payload and everything after it must also be padding. Slack bits in
    /// the final group must be zero.
    pub fn decode(text: &str, alphabet: &AlphabetSpec) -> Result<Vec<u8>, CodecError> {
        let shape = group_shape(alphabet)?;
        let g = shape.group_bits;
        let s = shape.symbols_per_group as usize;
        let radix = alphabet.radix() as u128;

        let mut out = Vec::with_capacity(text.len() * g as usize / (8 * s) + 1);
        let mut acc: u64 = 0;
        let mut bits: u32 = 0;
        // Digits of the group currently being assembled (multi-symbol
        // geometries only; with one symbol per group it drains immediately).
        let mut pending: Vec<u8> = Vec::with_capacity(s);
        let mut payload_symbols = 0usize;
        let mut pad_symbols = 0usize;

        for (position, c) in text.chars().enumerate() {
            if alphabet.is_ignored(c) {
                continue;
            }
            if alphabet.padding() == Some(c) {
                pad_symbols += 1;
                continue;
            }
            if pad_symbols > 0 {
                return Err(CodecError::InvalidPadding(format!(
                    "symbol '{c}' at position {position} after padding"
                )));
            }
            if alphabet.zero_group() == Some(c) {
                // The shorthand stands in for one whole all-zero group and
                // is only valid on a group boundary.
                if !pending.is_empty() || bits != 0 {
                    return Err(CodecError::InvalidSymbol {
                        symbol: c,
                        position,
                    });
                }
                out.extend(std::iter::repeat(0u8).take(g as usize / 8));
                payload_symbols += s;
                continue;
            }
            let digit = alphabet.index_of(c).ok_or(CodecError::InvalidSymbol {
                symbol: c,
                position,
            })?;
            payload_symbols += 1;
            pending.push(digit);
            if pending.len() < s {
                continue;
            }

            let mut value: u128 = 0;
            for &d in &pending {
                value = value * radix + u128::from(d);
            }
            pending.clear();
            if value >> g != 0 {
                return Err(CodecError::InvalidPadding(format!(
                    "group ending at position {position} overflows {g} bits"
                )));
            }
            acc = (acc << g) | value as u64;
            bits += g;
            while bits >= 8 {
                bits -= 8;
                out.push((acc >> bits) as u8);
            }
        }

        if alphabet.whole_groups_only() && payload_symbols % s != 0 {
            return Err(CodecError::InvalidLength {
                length: text.chars().count(),
                reason: format!("text must hold whole groups of {s} symbols"),
            });
        }

        if !pending.is_empty() {
            let t = pending.len();
            let tail_bits = shape.tail_bits(t);
            if tail_bits == 0 {
                return Err(CodecError::InvalidLength {
                    length: text.chars().count(),
                    reason: "trailing symbols carry no data".into(),
                });
            }
            let mut value: u128 = 0;
            for &d in &pending {
                value = value * radix + u128::from(d);
            }
            if value >> tail_bits != 0 {
                return Err(CodecError::InvalidPadding(format!(
                    "{t} trailing symbols encode more than {tail_bits} bits"
                )));
            }
            acc = (acc << tail_bits) | value as u64;
            bits += tail_bits;
            let before = out.len();
            while bits >= 8 {
                bits -= 8;
                out.push((acc >> bits) as u8);
            }
            // A valid encoder tail always completes at least one byte.
            if out.len() == before {
                return Err(CodecError::InvalidLength {
                    length: text.chars().count(),
                    reason: "trailing symbols complete no byte".into(),
                });
            }
        }

        if alphabet.padding().is_some() {
            let block = shape.block_symbols();
            let total = payload_symbols + pad_symbols;
            if total % block != 0 {
                return Err(CodecError::InvalidLength {
                    length: total,
                    reason: format!("padded text must be a multiple of {block} symbols"),
                });
            }
            if pad_symbols >= block {
                return Err(CodecError::InvalidPadding(format!(
                    "{pad_symbols} padding symbols exceed one block"
                )));
            }
        }
        // A final symbol that contributed no output bytes means the text
        // length is impossible for this geometry (e.g. odd-length base16).
        if bits >= g.min(8) {
            return Err(CodecError::InvalidLength {
                length: text.chars().count(),
                reason: format!("{bits} leftover bits exceed one symbol's payload"),
            });
        }
        if acc & ((1u64 << bits) - 1) != 0 {
            return Err(CodecError::InvalidPadding(format!(
                "{bits} non-zero leftover bits"
            )));
        }
        if out.is_empty() && payload_symbols > 0 {
            return Err(CodecError::InvalidLength {
                length: text.chars().count(),
                reason: "text too short to encode any bytes".into(),
            });
        }
        Ok(out)
    }
}
