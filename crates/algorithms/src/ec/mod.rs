//! Elliptic curve group providers
//!
//! The exchange engine is written against [`EcGroup`], a static provider
//! trait implemented by one zero-sized type per curve. The NIST curves are
//! backed by the RustCrypto `p256`, `p384` and `p521` crates and edwards25519
//! by `curve25519-dalek`.
//!
//! Scalars enter and leave the providers as big-endian integers of exactly
//! [`EcGroup::SCALAR_LENGTH`] bytes. Elements are exchanged in each curve's
//! compressed encoding.

use core::fmt;

use dpake_api::GroupId;
use dpake_common::SecretVec;
use dpake_params::pake::spake2::{
    SPAKE2_ED25519_M, SPAKE2_ED25519_N, SPAKE2_P256_M, SPAKE2_P256_N, SPAKE2_P384_M,
    SPAKE2_P384_N, SPAKE2_P521_M, SPAKE2_P521_N,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{rng_failure, Result};

mod edwards25519;
mod nist;

pub use edwards25519::Edwards25519;
pub use nist::{NistP256, NistP384, NistP521};

/// A prime-order elliptic curve group
///
/// Implementations are stateless; every operation is an associated
/// function so that the group is selected entirely at compile time.
pub trait EcGroup: Copy + fmt::Debug + Send + Sync + 'static {
    /// Integer modulo the group order
    type Scalar: Copy + Zeroize + Send + Sync;

    /// Group element
    type Element: Copy + Zeroize + PartialEq + fmt::Debug + Send + Sync;

    /// Identifier of the group
    const ID: GroupId;

    /// Bit length of the prime order `n`
    const ORDER_BITS: usize;

    /// Cofactor of the curve
    const COFACTOR: u32;

    /// Size of an encoded scalar in bytes
    const SCALAR_LENGTH: usize;

    /// Size of an encoded element in bytes
    const ELEMENT_LENGTH: usize;

    /// The standard base point
    fn generator() -> Self::Element;

    /// The neutral element
    fn identity() -> Self::Element;

    /// Interpret `bytes` as a big-endian integer and accept it if it lies
    /// in `[1, n-1]`
    ///
    /// Returns `None` for zero, for values not below `n`, and for inputs
    /// that are not exactly `SCALAR_LENGTH` bytes long.
    fn nonzero_scalar_from_be_bytes(bytes: &[u8]) -> Option<Self::Scalar>;

    /// Canonical encoding of a scalar as used by the group's own encoding
    /// rules
    fn scalar_to_bytes(scalar: &Self::Scalar) -> SecretVec;

    /// `scalar * G`
    fn mul_base(scalar: &Self::Scalar) -> Self::Element;

    /// `scalar * element`
    fn mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element;

    /// Group operation
    fn add(a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Group inverse
    fn neg(element: &Self::Element) -> Self::Element;

    /// Canonical encoding of an element
    fn encode(element: &Self::Element) -> Vec<u8>;

    /// Decode a canonical encoding
    ///
    /// Fails with an encoding error for anything that is not the canonical
    /// encoding of a point on the curve. The identity decodes successfully
    /// so that callers can reject it explicitly.
    fn decode(bytes: &[u8]) -> Result<Self::Element>;

    /// Whether `element` is the neutral element
    fn is_identity(element: &Self::Element) -> bool;

    /// Whether `element` satisfies the curve equation
    fn is_on_curve(element: &Self::Element) -> bool;

    /// Whether `element` lies in the prime-order subgroup
    fn is_torsion_free(element: &Self::Element) -> bool;

    /// Sample a scalar uniformly from `[1, n-1]`
    ///
    /// Draws are masked to `ORDER_BITS` bits and rejected when out of range,
    /// so no modular reduction biases the result.
    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Scalar> {
        let mut buf = SecretVec::zeroed(Self::SCALAR_LENGTH);
        loop {
            rng.try_fill_bytes(buf.as_mut_slice())
                .map_err(|e| rng_failure("EcGroup::random_scalar", e))?;
            mask_to_bits(buf.as_mut_slice(), Self::ORDER_BITS);
            if let Some(scalar) = Self::nonzero_scalar_from_be_bytes(buf.as_slice()) {
                return Ok(scalar);
            }
        }
    }

    /// The SPAKE2 blinding elements `(M, N)` of this group
    fn fixed_points() -> Result<(Self::Element, Self::Element)> {
        let (m, n) = fixed_points(Self::ID);
        Ok((Self::decode(m)?, Self::decode(n)?))
    }
}

/// Encodings of the SPAKE2 blinding elements `(M, N)` for `group`
///
/// The values are the RFC 9382 constants. They are public, independent of
/// any password, and never recomputed.
pub fn fixed_points(group: GroupId) -> (&'static [u8], &'static [u8]) {
    match group {
        GroupId::P256 => (&SPAKE2_P256_M, &SPAKE2_P256_N),
        GroupId::P384 => (&SPAKE2_P384_M, &SPAKE2_P384_N),
        GroupId::P521 => (&SPAKE2_P521_M, &SPAKE2_P521_N),
        GroupId::Edwards25519 => (&SPAKE2_ED25519_M, &SPAKE2_ED25519_N),
    }
}

/// Shift a big-endian buffer right so that its leading `bits` bits become
/// an integer of exactly `bits` bits
///
/// This is the inverse of the left alignment performed by a truncated hash
/// whose bit count is not a multiple of eight. `bytes` must be
/// `ceil(bits / 8)` bytes long.
pub fn bits_to_int(bytes: &mut [u8], bits: usize) {
    debug_assert_eq!(bytes.len(), bits.div_ceil(8));
    let shift = (bytes.len() * 8).saturating_sub(bits);
    if shift == 0 {
        return;
    }
    for i in (0..bytes.len()).rev() {
        let carry = if i > 0 { bytes[i - 1] << (8 - shift) } else { 0 };
        bytes[i] = (bytes[i] >> shift) | carry;
    }
}

/// Clear every bit above the low `bits` bits of a big-endian buffer
fn mask_to_bits(bytes: &mut [u8], bits: usize) {
    let excess = (bytes.len() * 8).saturating_sub(bits);
    for byte in bytes.iter_mut().take(excess / 8) {
        *byte = 0;
    }
    if let Some(byte) = bytes.get_mut(excess / 8) {
        *byte &= 0xFF >> (excess % 8);
    }
}
