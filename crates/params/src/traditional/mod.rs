//! Constants for classical elliptic curve groups

pub mod ec;
