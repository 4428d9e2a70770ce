//! End-to-end SPAKE2 exchanges through the public API only

use dpake_algorithms::{EcGroup, Edwards25519, HashRegistry, NistP256, NistP384, NistP521};
use dpake_api::{Error, PeerId};
use dpake_spake2::{Context, Parameters, State};
use dpake_tests::{parameters, run_handshake, CONTEXT, ID_A, ID_B, PASSWORD};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn agree<G: EcGroup>() {
    let p = parameters::<G>(PASSWORD).unwrap();
    let (a, b) = run_handshake((&p, PeerId::PeerA), (&p, PeerId::PeerB), 42).unwrap();
    assert_eq!(a, b, "{}", G::ID);
}

fn disagree_on_wrong_password<G: EcGroup>() {
    let p = parameters::<G>(PASSWORD).unwrap();
    let q = parameters::<G>(b"wrong password").unwrap();
    for seed in 0..4 {
        let (a, b) = run_handshake((&p, PeerId::PeerA), (&q, PeerId::PeerB), seed).unwrap();
        assert_ne!(a, b, "{}", G::ID);
    }
}

fn reject_identity<G: EcGroup>() {
    let p = parameters::<G>(PASSWORD).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for role in [PeerId::PeerA, PeerId::PeerB] {
        let mut ctx = Context::new(role, &p);
        ctx.generate_message(&mut rng).unwrap();
        let err = ctx.process_message(&G::encode(&G::identity())).unwrap_err();
        assert!(matches!(err, Error::InvalidPeerElement { .. }));
        assert!(err.is_peer_error());
        assert_eq!(ctx.state(), State::Failed);
    }
}

fn reject_truncated_message<G: EcGroup>() {
    let p = parameters::<G>(PASSWORD).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let mut a = Context::new(PeerId::PeerA, &p);
    let mut b = Context::new(PeerId::PeerB, &p);
    a.generate_message(&mut rng).unwrap();
    let msg_b = b.generate_message(&mut rng).unwrap();

    let err = a.process_message(&msg_b[..msg_b.len() - 1]).unwrap_err();
    assert!(matches!(err, Error::Encoding { .. }));
    assert!(matches!(a.process_message(&msg_b), Err(Error::State { .. })));
}

#[test]
fn every_group_agrees() {
    agree::<NistP256>();
    agree::<NistP384>();
    agree::<NistP521>();
    agree::<Edwards25519>();
}

#[test]
fn wrong_password_never_agrees() {
    disagree_on_wrong_password::<NistP256>();
    disagree_on_wrong_password::<NistP384>();
    disagree_on_wrong_password::<NistP521>();
    disagree_on_wrong_password::<Edwards25519>();
}

#[test]
fn identity_is_rejected_for_both_roles() {
    reject_identity::<NistP256>();
    reject_identity::<NistP384>();
    reject_identity::<NistP521>();
    reject_identity::<Edwards25519>();
}

#[test]
fn truncated_message_is_an_encoding_error() {
    reject_truncated_message::<NistP256>();
    reject_truncated_message::<NistP384>();
    reject_truncated_message::<NistP521>();
    reject_truncated_message::<Edwards25519>();
}

#[test]
fn messages_may_be_processed_in_any_order() {
    let p = parameters::<NistP256>(PASSWORD).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let mut a = Context::new(PeerId::PeerA, &p);
    let mut b = Context::new(PeerId::PeerB, &p);

    // B finishes before A has even produced its message
    let msg_b = b.generate_message(&mut rng).unwrap();
    let msg_a = a.generate_message(&mut rng).unwrap();
    let secret_b = b.process_message(&msg_a).unwrap();
    let secret_a = a.process_message(&msg_b).unwrap();
    assert_eq!(secret_a, secret_b);
}

#[test]
fn one_parameter_set_serves_many_handshakes() {
    let p = parameters::<Edwards25519>(PASSWORD).unwrap();
    let mut secrets = Vec::new();
    for seed in 0..5 {
        let (a, b) = run_handshake((&p, PeerId::PeerA), (&p, PeerId::PeerB), seed).unwrap();
        assert_eq!(a, b);
        secrets.push(a);
    }
    for (i, s) in secrets.iter().enumerate() {
        for t in &secrets[i + 1..] {
            assert_ne!(s, t, "fresh ephemeral scalars give fresh secrets");
        }
    }
}

#[test]
fn parameters_are_shareable_across_threads() {
    let p = parameters::<NistP256>(PASSWORD).unwrap();
    let (a, b) = std::thread::scope(|scope| {
        let first = scope.spawn(|| {
            run_handshake((&p, PeerId::PeerA), (&p, PeerId::PeerB), 77).unwrap()
        });
        let second = scope.spawn(|| {
            run_handshake((&p, PeerId::PeerA), (&p, PeerId::PeerB), 77).unwrap()
        });
        (first.join().unwrap(), second.join().unwrap())
    });
    assert_eq!(a.0, b.0);
    assert_eq!(a.0, a.1);
}

#[test]
fn both_sides_must_share_the_hash() {
    let registry = HashRegistry::default();
    let sha256 =
        Parameters::<Edwards25519>::new(&registry, "SHA-256", PASSWORD, ID_A, ID_B, CONTEXT)
            .unwrap();
    let sha3 =
        Parameters::<Edwards25519>::new(&registry, "SHA-3(256)", PASSWORD, ID_A, ID_B, CONTEXT)
            .unwrap();
    let (a, b) = run_handshake((&sha256, PeerId::PeerA), (&sha3, PeerId::PeerB), 4).unwrap();
    assert_ne!(a, b);
}

#[test]
fn messages_use_compressed_encodings() {
    use dpake_params::traditional::ec::{
        ED25519_POINT_SIZE, P256_POINT_COMPRESSED_SIZE, P384_POINT_COMPRESSED_SIZE,
        P521_POINT_COMPRESSED_SIZE,
    };

    fn message_len<G: EcGroup>() -> usize {
        let p = parameters::<G>(PASSWORD).unwrap();
        let mut ctx = Context::new(PeerId::PeerA, &p);
        let msg = ctx.generate_message(&mut ChaCha20Rng::seed_from_u64(3)).unwrap();
        assert_eq!(msg.len(), G::ELEMENT_LENGTH);
        msg.len()
    }

    assert_eq!(message_len::<NistP256>(), P256_POINT_COMPRESSED_SIZE);
    assert_eq!(message_len::<NistP384>(), P384_POINT_COMPRESSED_SIZE);
    assert_eq!(message_len::<NistP521>(), P521_POINT_COMPRESSED_SIZE);
    assert_eq!(message_len::<Edwards25519>(), ED25519_POINT_SIZE);
}
