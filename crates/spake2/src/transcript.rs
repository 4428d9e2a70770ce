//! Transcript encoding and secret derivation
//!
//! Every field is written as an 8-byte little-endian length followed by
//! the field itself, so no two distinct field sequences share an encoding.
//! The field order is
//!
//! ```text
//! id_A || id_B || message_A || message_B || K || w
//! ```
//!
//! with the two messages in that order no matter which peer computes it.

use dpake_api::HashFunction;
use dpake_common::SecretVec;
use dpake_params::pake::spake2::SPAKE2_LENGTH_PREFIX_SIZE;

/// Append-only, self-wiping transcript buffer
pub(crate) struct Transcript {
    bytes: SecretVec,
}

impl Transcript {
    /// Transcript of `fields`, each length-prefixed
    pub(crate) fn new(fields: &[&[u8]]) -> Self {
        let capacity = fields
            .iter()
            .map(|f| SPAKE2_LENGTH_PREFIX_SIZE + f.len())
            .sum();
        let mut bytes = SecretVec::with_capacity(capacity);
        for field in fields {
            bytes.extend_from_slice(&length_prefix(field));
            bytes.extend_from_slice(field);
        }
        Self { bytes }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

/// Feed one length-prefixed field into `hash`
pub(crate) fn absorb_prefixed(hash: &mut dyn HashFunction, field: &[u8]) {
    hash.update(&length_prefix(field));
    hash.update(field);
}

fn length_prefix(field: &[u8]) -> [u8; SPAKE2_LENGTH_PREFIX_SIZE] {
    (field.len() as u64).to_le_bytes()
}
