//! Trait definitions for the dpake providers

pub mod hash;

pub use hash::HashFunction;
