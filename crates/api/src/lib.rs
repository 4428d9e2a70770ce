//! Public API traits and types for the dpake library
//!
//! This crate provides the public API surface for the dpake ecosystem: the
//! error taxonomy shared by every crate, the hash provider trait, and the
//! identifiers used to select groups and protocol roles.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::HashFunction;
