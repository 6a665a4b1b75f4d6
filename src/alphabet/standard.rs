//! Constructors for published standard alphabets.
//!
//! Each constructor returns a fully configured [`AlphabetSpec`] matching the
//! published symbol table and quirks of the encoding. Construction re-runs
//! the normal validation, so the error paths are the same as for custom
//! alphabets.

use crate::alphabet::AlphabetSpec;
use crate::error::CodecError;

const BASE32_RFC4648: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE32_HEX: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
const BASE32_CROCKFORD: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const BASE58_BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE58_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE64_STANDARD: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const Z85: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";
const BASE91: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"";

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Binary: one bit per symbol, most significant bit first.
pub fn base2() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::block(chars("01"), 1, 1)
}

/// Octal: three bits per symbol.
pub fn base8() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::block(chars("01234567"), 3, 1)
}

/// RFC 4648 base16 (hex), uppercase canonical, lowercase accepted on decode.
pub fn base16() -> Result<AlphabetSpec, CodecError> {
    Ok(AlphabetSpec::block(chars("0123456789ABCDEF"), 4, 1)?.with_case_folding())
}

/// RFC 4648 base32 with `=` padding.
pub fn base32() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::block(chars(BASE32_RFC4648), 5, 1)?.with_padding('=')
}

/// RFC 4648 base32hex with `=` padding.
pub fn base32_hex() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::block(chars(BASE32_HEX), 5, 1)?.with_padding('=')
}

/// Crockford base32: case-insensitive, hyphen separators ignored,
/// ambiguous glyphs folded (O → 0, I/L → 1). Unpadded.
pub fn base32_crockford() -> Result<AlphabetSpec, CodecError> {
    let mut spec = AlphabetSpec::block(chars(BASE32_CROCKFORD), 5, 1)?
        .with_case_folding()
        .with_ignore_chars(['-']);
    spec.register_alias('O', 0)?;
    spec.register_alias('I', 1)?;
    spec.register_alias('L', 1)?;
    Ok(spec)
}

/// Base36 over 0-9 then A-Z, case-insensitive. Leading zeros fold into the
/// magnitude.
pub fn base36() -> Result<AlphabetSpec, CodecError> {
    Ok(
        AlphabetSpec::positional(chars("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"))?
            .with_case_folding(),
    )
}

/// Bitcoin base58: leading zero bytes preserved as leading `'1'` symbols.
pub fn base58_bitcoin() -> Result<AlphabetSpec, CodecError> {
    Ok(AlphabetSpec::positional(chars(BASE58_BITCOIN))?.with_zero_digit())
}

/// Flickr base58 (lowercase-first ordering), zero digit `'1'`.
pub fn base58_flickr() -> Result<AlphabetSpec, CodecError> {
    Ok(AlphabetSpec::positional(chars(BASE58_FLICKR))?.with_zero_digit())
}

/// Base62 over 0-9A-Za-z. No zero digit: leading zero bytes fold into the
/// magnitude, matching the common URL-shortener behavior.
pub fn base62() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::positional(chars(BASE62))
}

/// RFC 4648 base64 with `=` padding.
pub fn base64() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::block(chars(BASE64_STANDARD), 6, 1)?.with_padding('=')
}

/// RFC 4648 base64url, unpadded.
pub fn base64_url() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::block(chars(BASE64_URL), 6, 1)
}

/// Ascii85: 32-bit groups over `'!'..='u'`, with the `'z'` shorthand for an
/// all-zero group and partial trailing groups allowed.
pub fn base85_ascii() -> Result<AlphabetSpec, CodecError> {
    let symbols: Vec<char> = (b'!'..=b'u').map(char::from).collect();
    AlphabetSpec::block(symbols, 32, 5)?.with_zero_group('z')
}

/// ZeroMQ Z85: 32-bit groups, input must be a multiple of 4 bytes.
pub fn z85() -> Result<AlphabetSpec, CodecError> {
    Ok(AlphabetSpec::block(chars(Z85), 32, 5)?.with_whole_groups())
}

/// Base91 over the basE91 symbol set: 13-bit groups rendered as symbol
/// pairs, with a capacity-based variable-length tail.
pub fn base91() -> Result<AlphabetSpec, CodecError> {
    AlphabetSpec::block(chars(BASE91), 13, 2)
}

/// Base128: seven bits per symbol over the 94 printable ASCII characters
/// followed by 34 printable Latin-1 characters.
pub fn base128() -> Result<AlphabetSpec, CodecError> {
    let mut symbols: Vec<char> = ('!'..='~').collect();
    symbols.extend(('\u{a1}'..).take(128 - symbols.len()));
    AlphabetSpec::block(symbols, 7, 1)
}
