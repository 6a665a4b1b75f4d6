//! Seeded random round-trip coverage across every standard alphabet.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use radix_codec::{decode, encode, standard, AlphabetSpec};

fn random_bytes(rng: &mut Xoshiro256PlusPlus, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

fn assert_round_trips(spec: &AlphabetSpec, name: &str) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let input = random_bytes(&mut rng, len);
        let encoded = encode(&input, spec).unwrap();
        let decoded = decode(&encoded, spec).unwrap();
        assert_eq!(decoded, input, "{name} failed at length {len}");
    }
}

#[test]
fn test_block_alphabets_round_trip() {
    assert_round_trips(&standard::base2().unwrap(), "base2");
    assert_round_trips(&standard::base8().unwrap(), "base8");
    assert_round_trips(&standard::base16().unwrap(), "base16");
    assert_round_trips(&standard::base32().unwrap(), "base32");
    assert_round_trips(&standard::base32_hex().unwrap(), "base32hex");
    assert_round_trips(&standard::base32_crockford().unwrap(), "crockford");
    assert_round_trips(&standard::base64().unwrap(), "base64");
    assert_round_trips(&standard::base64_url().unwrap(), "base64url");
    assert_round_trips(&standard::base85_ascii().unwrap(), "ascii85");
    assert_round_trips(&standard::base91().unwrap(), "base91");
    assert_round_trips(&standard::base128().unwrap(), "base128");
}

#[test]
fn test_positional_alphabets_round_trip() {
    // Zero-digit alphabets round-trip arbitrary buffers, leading zeros
    // included.
    assert_round_trips(&standard::base58_bitcoin().unwrap(), "base58");
    assert_round_trips(&standard::base58_flickr().unwrap(), "base58-flickr");
}

#[test]
fn test_fold_policy_round_trips_magnitudes() {
    // Without a zero digit, leading zero bytes fold into the magnitude, so
    // round-trip over inputs with a non-zero first byte.
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for spec in [standard::base62().unwrap(), standard::base36().unwrap()] {
        for _ in 0..50 {
            let len = rng.gen_range(1..64);
            let mut input = random_bytes(&mut rng, len);
            input[0] = rng.gen_range(1..=255);
            let encoded = encode(&input, &spec).unwrap();
            assert_eq!(decode(&encoded, &spec).unwrap(), input);
        }
    }
}

#[test]
fn test_z85_round_trips_whole_groups() {
    let z85 = standard::z85().unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
    for groups in 0..40 {
        let input = random_bytes(&mut rng, groups * 4);
        let encoded = encode(&input, &z85).unwrap();
        assert_eq!(encoded.chars().count(), groups * 5);
        assert_eq!(decode(&encoded, &z85).unwrap(), input);
    }
}

#[test]
fn test_all_zero_buffers() {
    for len in [1usize, 4, 5, 31] {
        let zeros = vec![0u8; len];
        for spec in [
            standard::base16().unwrap(),
            standard::base32().unwrap(),
            standard::base58_bitcoin().unwrap(),
            standard::base64().unwrap(),
            standard::base85_ascii().unwrap(),
            standard::base91().unwrap(),
        ] {
            let encoded = encode(&zeros, &spec).unwrap();
            assert_eq!(decode(&encoded, &spec).unwrap(), zeros, "length {len}");
        }
    }
}

#[test]
fn test_base58_leading_zero_fidelity() {
    let b58 = standard::base58_bitcoin().unwrap();
    for k in 0..8 {
        let mut input = vec![0u8; k];
        input.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        let encoded = encode(&input, &b58).unwrap();
        let ones = encoded.chars().take_while(|&c| c == '1').count();
        assert_eq!(ones, k, "expected exactly {k} leading zero digits");
        assert_eq!(decode(&encoded, &b58).unwrap(), input);
    }
}

#[test]
fn test_ascii85_shorthand_and_expanded_equivalence() {
    let a85 = standard::base85_ascii().unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    for _ in 0..20 {
        // Random data with embedded all-zero groups.
        let mut input = random_bytes(&mut rng, 16);
        input[4..8].fill(0);
        input[12..16].fill(0);
        let encoded = encode(&input, &a85).unwrap();
        assert!(encoded.contains('z'));
        // Expanding each shorthand to an explicit zero group decodes the same.
        let expanded = encoded.replace('z', "!!!!!");
        assert_eq!(decode(&encoded, &a85).unwrap(), input);
        assert_eq!(decode(&expanded, &a85).unwrap(), input);
    }
}
