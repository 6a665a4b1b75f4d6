use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Conversion strategy for an alphabet.
///
/// The tag is attached when the alphabet is constructed and drives dispatch
/// in [`crate::codec::encode`]/[`crate::codec::decode`]. It is never inferred
/// from the radix at call time, so the same radix can be driven through
/// either engine deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Arbitrary-precision positional conversion (Base58, Base62, ...).
    Positional,
    /// Fixed-ratio bit-group conversion (Base32, Base64, Z85, ...).
    Block,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positional => write!(f, "positional"),
            Self::Block => write!(f, "block"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(Self::Positional),
            "block" => Ok(Self::Block),
            _ => Err(format!(
                "Unknown strategy: {s}. Available: positional, block"
            )),
        }
    }
}

/// Bit-group geometry for block alphabets.
///
/// `group_bits` input bits are consumed per group and rendered as
/// `symbols_per_group` output symbols (most significant digit first).
/// Base32 is `(5, 1)`, base64 `(6, 1)`, base91 `(13, 2)`, Z85 `(32, 5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupShape {
    pub group_bits: u32,
    pub symbols_per_group: u32,
}

impl GroupShape {
    /// Number of input bytes that fill a whole number of groups.
    ///
    /// This is the padded-block granularity: base32 groups realign with the
    /// byte stream every 5 bytes, base64 every 3.
    pub fn block_bytes(&self) -> usize {
        (lcm(self.group_bits as usize, 8)) / 8
    }

    /// Number of output symbols produced per padded block.
    pub fn block_symbols(&self) -> usize {
        (lcm(self.group_bits as usize, 8) / self.group_bits as usize)
            * self.symbols_per_group as usize
    }

    /// Payload bits carried by a partial trailing group of `t` symbols.
    pub fn tail_bits(&self, t: usize) -> u32 {
        (t as u32 * self.group_bits) / self.symbols_per_group
    }

    /// Symbols needed to carry `r` leftover payload bits (`0 < r < group_bits`).
    pub fn tail_symbols(&self, r: u32) -> usize {
        ((r * self.symbols_per_group).div_ceil(self.group_bits)) as usize
    }
}

fn lcm(a: usize, b: usize) -> usize {
    fn gcd(mut a: usize, mut b: usize) -> usize {
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        a
    }
    a / gcd(a, b) * b
}

/// Shared, immutable alphabet specification.
///
/// Holds the ordered symbol table, the reverse lookup map, and all
/// per-alphabet policy (aliases, padding, zero digit, ignored separators,
/// case folding, group geometry). Construction validates everything up
/// front; afterwards the spec is read-only and cheap to clone, so one
/// instance can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct AlphabetSpec {
    /// Symbol at index i encodes digit value i.
    symbols: Arc<[char]>,
    /// Canonical symbol -> digit value.
    index: Arc<HashMap<char, u8>>,
    /// Ambiguous glyph -> canonical digit value (consulted before `index`).
    aliases: Arc<HashMap<char, u8>>,
    /// Characters skipped during decode without affecting bit position.
    ignore: Arc<HashSet<char>>,
    strategy: Strategy,
    group: Option<GroupShape>,
    zero_digit: Option<char>,
    padding: Option<char>,
    /// Shorthand symbol standing in for one all-zero group (Ascii85's 'z').
    zero_group: Option<char>,
    case_fold: bool,
    whole_groups_only: bool,
    min_length: usize,
}

impl AlphabetSpec {
    fn build(
        symbols: Vec<char>,
        strategy: Strategy,
        group: Option<GroupShape>,
    ) -> Result<Self, CodecError> {
        if symbols.len() < 2 {
            return Err(CodecError::InsufficientRadix(symbols.len()));
        }
        if symbols.len() > 256 {
            return Err(CodecError::InvalidLength {
                length: symbols.len(),
                reason: "alphabet may hold at most 256 symbols".into(),
            });
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if index.insert(c, i as u8).is_some() {
                return Err(CodecError::DuplicateSymbol(c));
            }
        }

        if let Some(shape) = group {
            if shape.group_bits == 0 || shape.group_bits > 57 {
                return Err(CodecError::InvalidLength {
                    length: shape.group_bits as usize,
                    reason: "group size must be between 1 and 57 bits".into(),
                });
            }
            if shape.symbols_per_group == 0 || shape.symbols_per_group > 8 {
                return Err(CodecError::InvalidLength {
                    length: shape.symbols_per_group as usize,
                    reason: "groups must emit between 1 and 8 symbols".into(),
                });
            }
            // The group's symbol capacity must cover every group value.
            let capacity = (symbols.len() as u128)
                .checked_pow(shape.symbols_per_group)
                .unwrap_or(u128::MAX);
            if capacity < (1u128 << shape.group_bits) {
                return Err(CodecError::InvalidLength {
                    length: symbols.len(),
                    reason: format!(
                        "radix {} cannot express {} bits in {} symbols",
                        symbols.len(),
                        shape.group_bits,
                        shape.symbols_per_group
                    ),
                });
            }
        }

        Ok(Self {
            symbols: symbols.into(),
            index: Arc::new(index),
            aliases: Arc::new(HashMap::new()),
            ignore: Arc::new(HashSet::new()),
            strategy,
            group,
            zero_digit: None,
            padding: None,
            zero_group: None,
            case_fold: false,
            whole_groups_only: false,
            min_length: 0,
        })
    }

    /// Create a positional alphabet from an ordered symbol sequence.
    ///
    /// Symbol order determines digit value. Fails with `DuplicateSymbol` on
    /// any repeat and `InsufficientRadix` for fewer than two symbols.
    pub fn positional(symbols: impl Into<Vec<char>>) -> Result<Self, CodecError> {
        Self::build(symbols.into(), Strategy::Positional, None)
    }

    /// Create a block alphabet consuming `group_bits` input bits per group of
    /// `symbols_per_group` output symbols.
    ///
    /// In addition to the positional constructor's checks, the radix raised
    /// to `symbols_per_group` must cover every `group_bits`-bit value.
    pub fn block(
        symbols: impl Into<Vec<char>>,
        group_bits: u32,
        symbols_per_group: u32,
    ) -> Result<Self, CodecError> {
        Self::build(
            symbols.into(),
            Strategy::Block,
            Some(GroupShape {
                group_bits,
                symbols_per_group,
            }),
        )
    }

    /// Enable Base58-style leading-zero preservation.
    ///
    /// Each leading zero byte of the input is rendered as one copy of the
    /// index-0 symbol (Base58's `'1'`), and decode reconstructs the zero
    /// bytes from that prefix. Without this, leading zeros fold into the
    /// magnitude (Base62 policy).
    pub fn with_zero_digit(mut self) -> Self {
        self.zero_digit = Some(self.symbols[0]);
        self
    }

    /// Set the padding symbol.
    ///
    /// For block alphabets this is the trailing fill emitted to the block
    /// boundary (base64's `'='`); for positional alphabets it is the left
    /// fill used to reach a configured minimum length. The symbol must not
    /// collide with the alphabet itself.
    pub fn with_padding(mut self, pad: char) -> Result<Self, CodecError> {
        if self.lookup(pad).is_some() {
            return Err(CodecError::InvalidPadding(format!(
                "padding symbol '{pad}' is already an alphabet symbol"
            )));
        }
        self.padding = Some(pad);
        Ok(self)
    }

    /// Register characters to skip during decode (Crockford's hyphens).
    pub fn with_ignore_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        let set = Arc::make_mut(&mut self.ignore);
        set.extend(chars);
        self
    }

    /// Fold the opposite ASCII case onto canonical symbols before lookup.
    ///
    /// Only meaningful for alphabets where case carries no information;
    /// base64 must not enable this.
    pub fn with_case_folding(mut self) -> Self {
        self.case_fold = true;
        self
    }

    /// Set the shorthand symbol standing in for one all-zero group.
    ///
    /// Requires byte-aligned groups, since the shorthand expands to a whole
    /// number of zero bytes on decode.
    pub fn with_zero_group(mut self, shorthand: char) -> Result<Self, CodecError> {
        if self.lookup(shorthand).is_some() || self.padding == Some(shorthand) {
            return Err(CodecError::DuplicateSymbol(shorthand));
        }
        match self.group {
            Some(shape) if shape.group_bits % 8 == 0 => {}
            Some(shape) => {
                return Err(CodecError::InvalidLength {
                    length: shape.group_bits as usize,
                    reason: "zero-group shorthand requires byte-aligned groups".into(),
                });
            }
            None => {
                return Err(CodecError::InvalidLength {
                    length: 0,
                    reason: "zero-group shorthand requires a block alphabet".into(),
                });
            }
        }
        self.zero_group = Some(shorthand);
        Ok(self)
    }

    /// Reject inputs that do not fill whole groups (Z85's 4-byte rule).
    pub fn with_whole_groups(mut self) -> Self {
        self.whole_groups_only = true;
        self
    }

    /// Set a minimum encoded length for positional output; shorter encodings
    /// are left-padded with the padding symbol.
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Fold an ambiguous glyph onto a canonical digit value.
    ///
    /// Multiple aliases may target the same index, but a canonical symbol can
    /// never itself be re-aliased, and the target must be a valid index.
    pub fn register_alias(&mut self, symbol: char, canonical_index: u8) -> Result<(), CodecError> {
        if (canonical_index as usize) >= self.symbols.len() {
            return Err(CodecError::InvalidAlias {
                symbol,
                reason: format!(
                    "target index {canonical_index} out of range for radix {}",
                    self.symbols.len()
                ),
            });
        }
        if self.index.contains_key(&symbol) {
            return Err(CodecError::InvalidAlias {
                symbol,
                reason: "canonical symbols cannot be aliased".into(),
            });
        }
        if self.aliases.contains_key(&symbol) {
            return Err(CodecError::InvalidAlias {
                symbol,
                reason: "alias already registered".into(),
            });
        }
        Arc::make_mut(&mut self.aliases).insert(symbol, canonical_index);
        Ok(())
    }

    fn lookup(&self, c: char) -> Option<u8> {
        self.aliases
            .get(&c)
            .or_else(|| self.index.get(&c))
            .copied()
    }

    /// Digit value of a symbol: alias table first, then the canonical table,
    /// with optional case folding. `None` if the symbol is not recognized.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<u8> {
        if let Some(i) = self.lookup(c) {
            return Some(i);
        }
        if self.case_fold {
            let upper = c.to_ascii_uppercase();
            if upper != c {
                if let Some(i) = self.lookup(upper) {
                    return Some(i);
                }
            }
            let lower = c.to_ascii_lowercase();
            if lower != c {
                return self.lookup(lower);
            }
        }
        None
    }

    /// Like [`index_of`](Self::index_of), but failing with `UnknownSymbol`
    /// for callers that have no position to report.
    pub fn digit(&self, c: char) -> Result<u8, CodecError> {
        self.index_of(c).ok_or(CodecError::UnknownSymbol(c))
    }

    /// Symbol for a digit value.
    #[inline]
    pub fn symbol(&self, index: u8) -> Option<char> {
        self.symbols.get(index as usize).copied()
    }

    /// Number of symbols (the radix R).
    #[inline]
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// All canonical symbols in digit order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Group geometry; `None` for positional alphabets.
    #[inline]
    pub fn group_shape(&self) -> Option<GroupShape> {
        self.group
    }

    #[inline]
    pub fn zero_digit(&self) -> Option<char> {
        self.zero_digit
    }

    #[inline]
    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    #[inline]
    pub fn zero_group(&self) -> Option<char> {
        self.zero_group
    }

    #[inline]
    pub fn whole_groups_only(&self) -> bool {
        self.whole_groups_only
    }

    #[inline]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether a character is skipped during decode.
    #[inline]
    pub fn is_ignored(&self, c: char) -> bool {
        self.ignore.contains(&c)
    }
}

impl PartialEq for AlphabetSpec {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: clones share the same Arc.
        (Arc::ptr_eq(&self.symbols, &other.symbols) || self.symbols == other.symbols)
            && self.strategy == other.strategy
            && self.group == other.group
            && self.zero_digit == other.zero_digit
            && self.padding == other.padding
            && self.zero_group == other.zero_group
            && self.case_fold == other.case_fold
            && self.whole_groups_only == other.whole_groups_only
            && self.min_length == other.min_length
            && self.aliases == other.aliases
            && self.ignore == other.ignore
    }
}

impl Eq for AlphabetSpec {}
