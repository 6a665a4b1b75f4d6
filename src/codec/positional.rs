//! Arbitrary-radix positional conversion.
//!
//! Interprets the input as a big-endian unsigned magnitude and converts it
//! digit by digit with explicit byte-granularity carries. Complexity is
//! O(N²) in input length, so multi-megabyte buffers do not belong here;
//! power-of-two alphabets should use the block engine instead.

use crate::alphabet::AlphabetSpec;
use crate::error::CodecError;

/// Big-number conversion engine for alphabets whose radix is not a power of
/// two (Base58, Base62, Base36, ...).
pub struct PositionalCodec;

impl PositionalCodec {
    /// Encode bytes as positional digits in the alphabet's radix.
    ///
    /// When the alphabet has a zero digit, each leading zero byte becomes
    /// one copy of it, mirroring Base58's leading `'1'`s. Without one,
    /// leading zero bytes contribute nothing to the magnitude and are
    /// dropped (Base62 policy). If a minimum length is configured and
    /// unmet, the output is left-padded with the padding symbol.
    pub fn encode(bytes: &[u8], alphabet: &AlphabetSpec) -> Result<String, CodecError> {
        if bytes.is_empty() {
            return Ok(String::new());
        }
        let radix = alphabet.radix() as u32;
        let symbols = alphabet.symbols();

        let zeros = bytes.iter().take_while(|&&b| b == 0).count();
        let mut magnitude = bytes[zeros..].to_vec();

        // Base58 output grows by a factor of log(256)/log(58) ~ 1.37; size
        // for the worst case (radix 2) lazily via push.
        let mut digits: Vec<u8> = Vec::with_capacity(magnitude.len() * 2);

        // Repeated in-place long division by the radix, most significant
        // byte first. Each pass yields the next least significant digit.
        // `start` skips quotient bytes already reduced to zero.
        let mut start = 0;
        while start < magnitude.len() {
            let mut rem: u32 = 0;
            for b in &mut magnitude[start..] {
                let acc = (rem << 8) | u32::from(*b);
                *b = (acc / radix) as u8;
                rem = acc % radix;
            }
            digits.push(rem as u8);
            while start < magnitude.len() && magnitude[start] == 0 {
                start += 1;
            }
        }

        let mut out = String::with_capacity(zeros + digits.len());
        if let Some(zero) = alphabet.zero_digit() {
            for _ in 0..zeros {
                out.push(zero);
            }
        }
        // Digits were collected least significant first.
        for &d in digits.iter().rev() {
            out.push(symbols[d as usize]);
        }

        if out.chars().count() < alphabet.min_length() {
            if let Some(pad) = alphabet.padding() {
                let fill = alphabet.min_length() - out.chars().count();
                let mut padded = String::with_capacity(fill + out.len());
                for _ in 0..fill {
                    padded.push(pad);
                }
                padded.push_str(&out);
                out = padded;
            }
        }
        Ok(out)
    }

    /// Decode positional digits back into bytes.
    ///
    /// Leading padding symbols are stripped first, then (under the zero-digit
    /// policy) the run of leading zero digits, which reappears as that many
    /// zero bytes. The remaining digits are folded into a little-endian
    /// accumulator by multiply-then-add, growing one byte per carry overflow.
    pub fn decode(text: &str, alphabet: &AlphabetSpec) -> Result<Vec<u8>, CodecError> {
        let radix = alphabet.radix() as u32;

        let mut zeros = 0usize;
        // Little-endian accumulator; the top byte is non-zero by
        // construction because it only ever grows from a carry.
        let mut acc: Vec<u8> = Vec::new();
        let mut in_magnitude = false;
        let mut leading_pads_done = false;

        for (position, c) in text.chars().enumerate() {
            if alphabet.is_ignored(c) {
                continue;
            }
            if !leading_pads_done {
                if alphabet.padding() == Some(c) {
                    continue;
                }
                leading_pads_done = true;
            }
            if !in_magnitude {
                if alphabet.zero_digit() == Some(c) {
                    zeros += 1;
                    continue;
                }
                in_magnitude = true;
            }
            let digit = alphabet
                .index_of(c)
                .ok_or(CodecError::InvalidSymbol {
                    symbol: c,
                    position,
                })?;

            let mut carry = u32::from(digit);
            for b in &mut acc {
                let v = u32::from(*b) * radix + carry;
                *b = v as u8;
                carry = v >> 8;
            }
            while carry > 0 {
                acc.push(carry as u8);
                carry >>= 8;
            }
        }

        let mut out = vec![0u8; zeros];
        out.extend(acc.iter().rev());
        Ok(out)
    }
}
