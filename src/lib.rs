//! # dpake
//!
//! A password-authenticated key exchange library: a SPAKE2 engine over
//! prime-order elliptic curve groups, together with the hashing building
//! blocks it relies on.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dpake = "0.3"
//! ```
//!
//! ## Features
//!
//! - `spake2` (default): the SPAKE2 protocol engine
//! - `serde`: `Serialize`/`Deserialize` for the public identifiers
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dpake-api`]: Error taxonomy, the hash provider trait, identifiers
//! - [`dpake-common`]: Self-wiping containers for secret material
//! - [`dpake-params`]: Constants
//! - [`dpake-algorithms`]: Hash and elliptic curve group providers
//! - [`dpake-spake2`]: The SPAKE2 state machine

// Core re-exports (always available)
pub use dpake_algorithms as algorithms;
pub use dpake_api as api;
pub use dpake_common as common;
pub use dpake_params as params;

// Workspace dependencies that appear in the public API
pub use rand;
pub use subtle;
pub use zeroize;

// Feature-gated re-exports
#[cfg(feature = "spake2")]
pub use dpake_spake2 as spake2;

/// Common imports for dpake users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export identifiers and the hash provider trait
    pub use crate::api::{GroupId, HashFunction, PeerId};

    // Re-export providers
    pub use crate::algorithms::{
        EcGroup, Edwards25519, HashRegistry, NistP256, NistP384, NistP521, TruncatedHash,
    };

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretVec, SecureCompare, ZeroizeGuard};

    // Protocol types
    #[cfg(feature = "spake2")]
    pub use crate::spake2::{Context, Parameters, ParametersBuilder, SharedSecret, State};
}

#[cfg(all(test, feature = "spake2"))]
mod tests {
    use super::prelude::*;
    use crate::rand::SeedableRng;
    use crate::subtle::ConstantTimeEq;
    use crate::zeroize::Zeroize;

    #[test]
    fn test_reexported_crates_drive_a_handshake() {
        let params = Parameters::<Edwards25519>::builder()
            .group("edwards25519")
            .password(b"facade")
            .build::<Edwards25519>(&HashRegistry::default())
            .unwrap();

        let mut rng = crate::rand::rngs::StdRng::seed_from_u64(3);
        let mut a = Context::new(PeerId::PeerA, &params);
        let mut b = Context::new(PeerId::PeerB, &params);
        let msg_a = a.generate_message(&mut rng).unwrap();
        let msg_b = b.generate_message(&mut rng).unwrap();
        let secret_a = a.process_message(&msg_b).unwrap();
        let secret_b = b.process_message(&msg_a).unwrap();
        assert!(bool::from(secret_a.ct_eq(&secret_b)));

        let mut copy = SecretVec::from_slice(secret_a.as_bytes());
        copy.zeroize();
        assert!(copy.is_empty());
    }
}
