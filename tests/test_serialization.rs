//! Integration tests for serialization of the strategy and text-encoding
//! tags. Tests that the tags survive a JSON round trip.

use radix_codec::{Strategy, TextEncoding};

#[test]
fn test_strategy_serialization() {
    for strategy in [Strategy::Positional, Strategy::Block] {
        let json = serde_json::to_string(&strategy).unwrap();
        let deserialized: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(strategy, deserialized);
    }
}

#[test]
fn test_text_encoding_serialization() {
    for encoding in [
        TextEncoding::Utf8,
        TextEncoding::Utf16Le,
        TextEncoding::Utf16Be,
        TextEncoding::Ascii,
        TextEncoding::Latin1,
    ] {
        let json = serde_json::to_string(&encoding).unwrap();
        let deserialized: TextEncoding = serde_json::from_str(&json).unwrap();
        assert_eq!(encoding, deserialized);
    }
}

#[test]
fn test_strategy_parse_matches_display() {
    for strategy in [Strategy::Positional, Strategy::Block] {
        let parsed: Strategy = strategy.to_string().parse().unwrap();
        assert_eq!(parsed, strategy);
    }
}
