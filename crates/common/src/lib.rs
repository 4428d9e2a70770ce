//! Common implementations and shared functionality for the dpake library
//!
//! This crate provides the secret-material containers used across the dpake
//! components. Every container wipes its contents deterministically when it
//! goes out of scope, on success and error paths alike.

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretVec, ZeroizeGuard};

// Re-export memory safety traits and utilities
pub use security::memory::{barrier, SecureCompare};
