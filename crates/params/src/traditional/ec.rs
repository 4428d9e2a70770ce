//! Sizes of the prime-order groups used by the exchange
//!
//! Element sizes are for the compressed encoding. The NIST curves use SEC1
//! compressed points, edwards25519 the 32-byte RFC 8032 form.

/// Bit length of the P-256 group order
pub const P256_ORDER_BITS: usize = 256;

/// Size of a P-256 scalar in bytes
pub const P256_SCALAR_SIZE: usize = 32;

/// Size of a compressed P-256 point in bytes
pub const P256_POINT_COMPRESSED_SIZE: usize = 33;

/// Bit length of the P-384 group order
pub const P384_ORDER_BITS: usize = 384;

/// Size of a P-384 scalar in bytes
pub const P384_SCALAR_SIZE: usize = 48;

/// Size of a compressed P-384 point in bytes
pub const P384_POINT_COMPRESSED_SIZE: usize = 49;

/// Bit length of the P-521 group order
pub const P521_ORDER_BITS: usize = 521;

/// Size of a P-521 scalar in bytes
pub const P521_SCALAR_SIZE: usize = 66;

/// Size of a compressed P-521 point in bytes
pub const P521_POINT_COMPRESSED_SIZE: usize = 67;

/// Bit length of the order of the edwards25519 prime-order subgroup
pub const ED25519_ORDER_BITS: usize = 253;

/// Size of an edwards25519 scalar in bytes
pub const ED25519_SCALAR_SIZE: usize = 32;

/// Size of a compressed edwards25519 point in bytes
pub const ED25519_POINT_SIZE: usize = 32;

/// Cofactor of edwards25519
pub const ED25519_COFACTOR: u32 = 8;

/// Length of the SEC1 encoding of the point at infinity
pub const SEC1_IDENTITY_SIZE: usize = 1;
