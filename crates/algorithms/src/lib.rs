//! Hash and group providers for the dpake library
//!
//! This crate adapts audited RustCrypto and dalek primitives to the small,
//! object-safe and statically typed interfaces the key exchange engine is
//! written against:
//!
//! - [`hash`]: streaming hash providers, the bit-exact [`TruncatedHash`]
//!   adapter and a name-based [`HashRegistry`]
//! - [`ec`]: the [`EcGroup`] provider trait with implementations for the
//!   NIST curves and edwards25519, plus the static SPAKE2 M/N table
//!
//! Nothing in this crate holds global state. Secret intermediates are wiped
//! before every return.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function providers
pub mod hash;
pub use hash::{
    HashRegistry, Sha224, Sha256, Sha384, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha512,
    Sha512_256, Shake128, Shake256, TruncatedHash,
};

// Elliptic curve group providers
pub mod ec;
pub use ec::{bits_to_int, fixed_points, EcGroup, Edwards25519, NistP256, NistP384, NistP521};

// Re-export the provider trait so callers need a single import
pub use dpake_api::HashFunction;
