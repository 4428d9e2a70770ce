//! Randomized agreement and truncation properties

use dpake_algorithms::{HashFunction, NistP256, Sha256, TruncatedHash};
use dpake_api::PeerId;
use dpake_tests::{parameters, run_handshake};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn matching_passwords_agree(
        password in prop::collection::vec(any::<u8>(), 1..64),
        seed in any::<u64>(),
    ) {
        let p = parameters::<NistP256>(&password).unwrap();
        let (a, b) = run_handshake((&p, PeerId::PeerA), (&p, PeerId::PeerB), seed).unwrap();
        prop_assert_eq!(a.len(), 32);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn differing_passwords_disagree(
        password in prop::collection::vec(any::<u8>(), 1..64),
        flip in any::<prop::sample::Index>(),
        seed in any::<u64>(),
    ) {
        let mut other = password.clone();
        let i = flip.index(other.len());
        other[i] ^= 0x01;

        let p = parameters::<NistP256>(&password).unwrap();
        let q = parameters::<NistP256>(&other).unwrap();
        let (a, b) = run_handshake((&p, PeerId::PeerA), (&q, PeerId::PeerB), seed).unwrap();
        prop_assert_ne!(a, b);
    }
}

proptest! {
    #[test]
    fn truncation_keeps_exactly_the_leading_bits(
        message in prop::collection::vec(any::<u8>(), 0..256),
        bits in 1usize..=256,
    ) {
        let mut full = Sha256::new();
        full.update(&message);
        let full = full.finalize().unwrap();

        let mut truncated = TruncatedHash::new(Box::new(Sha256::new()), bits).unwrap();
        truncated.update(&message);
        let out = truncated.finalize().unwrap();

        prop_assert_eq!(out.len(), bits.div_ceil(8));
        let whole = bits / 8;
        prop_assert_eq!(&out[..whole], &full[..whole]);
        if bits % 8 != 0 {
            let mask = 0xFFu8 << (8 - bits % 8);
            prop_assert_eq!(out[whole], full[whole] & mask);
        }
    }
}
