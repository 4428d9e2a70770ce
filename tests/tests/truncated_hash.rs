//! Bit-exact truncation against the untruncated digests

use dpake_algorithms::{
    HashFunction, HashRegistry, Sha256, Sha3_256, Sha512, Shake256, TruncatedHash,
};
use dpake_api::Error;

const MESSAGE: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn full_digest(mut hash: Box<dyn HashFunction>) -> Vec<u8> {
    hash.update(MESSAGE);
    hash.finalize().unwrap()
}

#[test]
fn sha256_to_ten_bits() {
    let mut hash = TruncatedHash::new(Box::new(Sha256::new()), 10).unwrap();
    hash.update(MESSAGE);
    let out = hash.finalize().unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[1] & 0b0011_1111, 0);

    let full = full_digest(Box::new(Sha256::new()));
    assert_eq!(out[0], full[0]);
    assert_eq!(out[1], full[1] & 0b1100_0000);
}

#[test]
fn whole_byte_truncation_at_full_length_is_identity() {
    let cases: Vec<Box<dyn HashFunction>> = vec![
        Box::new(Sha256::new()),
        Box::new(Sha512::new()),
        Box::new(Sha3_256::new()),
        Box::new(Shake256::new(1024).unwrap()),
    ];
    for inner in cases {
        let bits = inner.output_length_bits();
        let full = full_digest(inner.new_object());
        let truncated = full_digest(Box::new(TruncatedHash::new(inner, bits).unwrap()));
        assert_eq!(truncated, full);
    }
}

#[test]
fn multiple_of_eight_is_a_prefix() {
    let full = full_digest(Box::new(Sha512::new()));
    for bytes in 1..=64usize {
        let truncated =
            full_digest(Box::new(TruncatedHash::new(Box::new(Sha512::new()), bytes * 8).unwrap()));
        assert_eq!(truncated, full[..bytes]);
    }
}

#[test]
fn nested_truncation_composes() {
    let registry = HashRegistry::default();
    let outer = registry.create("Truncated(Truncated(SHA-512,300),123)").unwrap();
    assert_eq!(outer.output_length_bits(), 123);
    assert_eq!(outer.output_length(), 16);

    let direct = full_digest(registry.create("Truncated(SHA-512,123)").unwrap());
    assert_eq!(full_digest(outer), direct);
}

#[test]
fn streaming_input_is_equivalent() {
    let mut streamed = TruncatedHash::new(Box::new(Sha256::new()), 77).unwrap();
    for chunk in MESSAGE.chunks(5) {
        streamed.update(chunk);
    }
    let one_shot = full_digest(Box::new(TruncatedHash::new(Box::new(Sha256::new()), 77).unwrap()));
    assert_eq!(streamed.finalize().unwrap(), one_shot);
}

#[test]
fn out_of_range_lengths_are_rejected() {
    for bits in [0usize, 513, 4096] {
        let err = TruncatedHash::new(Box::new(Sha512::new()), bits).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }), "{}", bits);
    }
}
