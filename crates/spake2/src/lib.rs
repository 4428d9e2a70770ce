//! SPAKE2 password-authenticated key exchange
//!
//! Two parties that share a password derive a common secret over an
//! untrusted channel. Each side sends one group element; an eavesdropper
//! learns nothing about the password and an active attacker gets a single
//! online guess per handshake.
//!
//! ```no_run
//! use dpake_algorithms::{HashRegistry, NistP256};
//! use dpake_api::PeerId;
//! use dpake_spake2::{Context, Parameters};
//! # fn main() -> dpake_api::Result<()> {
//! let registry = HashRegistry::default();
//! let params = Parameters::<NistP256>::new(
//!     &registry, "SHA-256", b"password", b"alice", b"bob", b"example",
//! )?;
//!
//! let mut rng = rand::thread_rng();
//! let mut a = Context::new(PeerId::PeerA, &params);
//! let mut b = Context::new(PeerId::PeerB, &params);
//! let msg_a = a.generate_message(&mut rng)?;
//! let msg_b = b.generate_message(&mut rng)?;
//! assert_eq!(a.process_message(&msg_b)?, b.process_message(&msg_a)?);
//! # Ok(())
//! # }
//! ```
//!
//! Role A always blinds with `M` and role B with `N`. Both peers must agree
//! on the parameters and take opposite roles; a mismatch is not reported as
//! an error and simply yields different secrets.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod context;
mod params;
mod role;
mod secret;
mod transcript;

pub use context::{Context, State};
pub use params::{Parameters, ParametersBuilder, DEFAULT_HASH};
pub use secret::SharedSecret;

pub use dpake_api::{Error, PeerId, Result};
