//! Testing utilities and benchmarks for the dpake library
//!
//! Shared fixtures for the integration tests under `tests/` and the
//! benchmarks under `benches/`.

use dpake_algorithms::{EcGroup, HashRegistry};
use dpake_api::{PeerId, Result};
use dpake_spake2::{Context, Parameters, SharedSecret};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Password used by the fixtures
pub const PASSWORD: &[u8] = b"top!secret";

/// Identity of the A role used by the fixtures
pub const ID_A: &[u8] = b"Jack";

/// Identity of the B role used by the fixtures
pub const ID_B: &[u8] = "René".as_bytes();

/// Application context used by the fixtures
pub const CONTEXT: &[u8] = b"dpake example";

/// Smallest built-in hash long enough for each supported group
pub fn default_hash<G: EcGroup>() -> &'static str {
    match G::ID {
        dpake_api::GroupId::P256 | dpake_api::GroupId::Edwards25519 => "SHA-256",
        dpake_api::GroupId::P384 => "SHA-384",
        dpake_api::GroupId::P521 => "SHAKE-256(528)",
    }
}

/// Parameters built from the fixture inputs and `password`
pub fn parameters<G: EcGroup>(password: &[u8]) -> Result<Parameters<G>> {
    Parameters::new(
        &HashRegistry::default(),
        default_hash::<G>(),
        password,
        ID_A,
        ID_B,
        CONTEXT,
    )
}

/// Run a complete exchange between two contexts and return
/// `(secret of the first, secret of the second)`
///
/// Both sides draw from one deterministic generator seeded with `seed`.
pub fn run_handshake<G: EcGroup>(
    first: (&Parameters<G>, PeerId),
    second: (&Parameters<G>, PeerId),
    seed: u64,
) -> Result<(SharedSecret, SharedSecret)> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut a = Context::new(first.1, first.0);
    let mut b = Context::new(second.1, second.0);

    let msg_a = a.generate_message(&mut rng)?;
    let msg_b = b.generate_message(&mut rng)?;
    let secret_b = b.process_message(&msg_a)?;
    let secret_a = a.process_message(&msg_b)?;
    Ok((secret_a, secret_b))
}
