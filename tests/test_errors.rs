//! Error-path coverage: construction rejection and decode failures.

use radix_codec::{decode, encode, standard, AlphabetSpec, CodecError};

#[test]
fn test_duplicate_symbol_rejected() {
    let err = AlphabetSpec::positional("abcdefa".chars().collect::<Vec<_>>()).unwrap_err();
    assert_eq!(err, CodecError::DuplicateSymbol('a'));
}

#[test]
fn test_insufficient_radix_rejected() {
    assert_eq!(
        AlphabetSpec::positional(vec!['x']).unwrap_err(),
        CodecError::InsufficientRadix(1)
    );
}

#[test]
fn test_invalid_symbol_names_character_and_index() {
    let b64 = standard::base64().unwrap();
    let err = decode("Zm9!YmFy", &b64).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidSymbol {
            symbol: '!',
            position: 3
        }
    );

    let b58 = standard::base58_bitcoin().unwrap();
    let err = decode("2NEpO", &b58).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidSymbol {
            symbol: 'O',
            position: 4
        }
    );
}

#[test]
fn test_error_display_mentions_offender() {
    let err = CodecError::InvalidSymbol {
        symbol: '!',
        position: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains('!'));
    assert!(msg.contains('3'));
}

#[test]
fn test_corrupted_padding_never_partially_decodes() {
    let b64 = standard::base64().unwrap();
    // Truncations of a valid encoding must all fail, never partially decode.
    let valid = encode(b"foob", &b64).unwrap();
    assert_eq!(valid, "Zm9vYg==");
    // A cut at a full-block boundary ("Zm9v") is a valid shorter encoding;
    // every other truncation must fail.
    for cut in (1..valid.len()).filter(|c| c % 4 != 0) {
        assert!(
            decode(&valid[..cut], &b64).is_err(),
            "truncation to {cut} symbols must fail"
        );
    }
}

#[test]
fn test_z85_invalid_length_on_encode_and_decode() {
    let z85 = standard::z85().unwrap();
    assert!(matches!(
        encode(&[1, 2, 3], &z85).unwrap_err(),
        CodecError::InvalidLength { length: 3, .. }
    ));
    assert!(matches!(
        decode("Hello!", &z85).unwrap_err(),
        CodecError::InvalidLength { .. }
    ));
}

#[test]
fn test_block_misuse_of_positional_alphabet() {
    use radix_codec::BlockBitCodec;
    let b58 = standard::base58_bitcoin().unwrap();
    assert!(BlockBitCodec::encode(b"x", &b58).is_err());
    assert!(BlockBitCodec::decode("x", &b58).is_err());
}

#[test]
fn test_decode_is_deterministic_for_errors() {
    // Errors are permanent, not transient: the same input always fails the
    // same way.
    let b32 = standard::base32().unwrap();
    let first = decode("MZXW6YT!", &b32).unwrap_err();
    let second = decode("MZXW6YT!", &b32).unwrap_err();
    assert_eq!(first, second);
}
