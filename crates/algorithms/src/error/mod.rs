//! Error handling for the hash and group providers
//!
//! Providers report through the workspace-wide error type so that failures
//! surface unchanged at the protocol layer.

pub use dpake_api::error::validate;
pub use dpake_api::{Error, Result};

use rand::Error as RngError;

/// Map a randomness source failure onto the crate error
pub(crate) fn rng_failure(context: &'static str, err: RngError) -> Error {
    Error::RandomGeneration {
        context,
        message: err.to_string(),
    }
}
