//! Constants for hashing building blocks

pub mod hash;
