//! Constants for hash functions

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA-512/256 in bytes
pub const SHA512_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-224 in bytes
pub const SHA3_224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-384 in bytes
pub const SHA3_384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Largest output, in bits, accepted for a SHAKE instance built by name
pub const SHAKE_MAX_OUTPUT_BITS: usize = 8192;

/// Largest digest produced by any fixed-output hash in the registry
pub const MAX_HASH_OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;
