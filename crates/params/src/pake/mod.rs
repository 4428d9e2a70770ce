//! Constants for password-authenticated key exchange

pub mod spake2;
