//! Hash function providers
//!
//! Every provider implements the object-safe [`HashFunction`] trait from
//! `dpake-api`, so higher layers can pick one at runtime by name through a
//! [`HashRegistry`] and wrap it in adapters such as [`TruncatedHash`].

pub mod registry;
pub mod shake;
pub mod truncated;

mod providers;

pub use providers::{
    Sha224, Sha256, Sha384, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha512, Sha512_256,
};
pub use registry::{HashConstructor, HashRegistry};
pub use shake::{Shake128, Shake256};
pub use truncated::TruncatedHash;

pub use dpake_api::HashFunction;
