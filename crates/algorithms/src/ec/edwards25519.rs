//! The prime-order subgroup of edwards25519
//!
//! The curve has cofactor 8, so a decoded point can carry a small-order
//! component. [`EcGroup::is_torsion_free`] is the check that excludes it.
//! Elements use the 32-byte compressed Edwards-Y form of RFC 8032, and only
//! canonical encodings are accepted. Scalars are encoded little-endian as
//! the curve's own rules require.

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::{Identity, IsIdentity};
use dpake_api::GroupId;
use dpake_common::SecretVec;
use dpake_params::traditional::ec::{
    ED25519_COFACTOR, ED25519_ORDER_BITS, ED25519_POINT_SIZE, ED25519_SCALAR_SIZE,
};
use zeroize::Zeroize;

use super::EcGroup;
use crate::error::{Error, Result};

/// The edwards25519 group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edwards25519;

impl EcGroup for Edwards25519 {
    type Scalar = Scalar;
    type Element = EdwardsPoint;

    const ID: GroupId = GroupId::Edwards25519;
    const ORDER_BITS: usize = ED25519_ORDER_BITS;
    const COFACTOR: u32 = ED25519_COFACTOR;
    const SCALAR_LENGTH: usize = ED25519_SCALAR_SIZE;
    const ELEMENT_LENGTH: usize = ED25519_POINT_SIZE;

    fn generator() -> Self::Element {
        ED25519_BASEPOINT_POINT
    }

    fn identity() -> Self::Element {
        EdwardsPoint::identity()
    }

    fn nonzero_scalar_from_be_bytes(bytes: &[u8]) -> Option<Self::Scalar> {
        if bytes.len() != ED25519_SCALAR_SIZE {
            return None;
        }
        let mut le = [0u8; ED25519_SCALAR_SIZE];
        for (dst, src) in le.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        let scalar = Option::<Scalar>::from(Scalar::from_canonical_bytes(le));
        le.zeroize();
        scalar.filter(|s| *s != Scalar::ZERO)
    }

    fn scalar_to_bytes(scalar: &Self::Scalar) -> SecretVec {
        let mut bytes = scalar.to_bytes();
        let out = SecretVec::from_slice(&bytes);
        bytes.zeroize();
        out
    }

    fn mul_base(scalar: &Self::Scalar) -> Self::Element {
        EdwardsPoint::mul_base(scalar)
    }

    fn mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element {
        element * scalar
    }

    fn add(a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    fn neg(element: &Self::Element) -> Self::Element {
        -element
    }

    fn encode(element: &Self::Element) -> Vec<u8> {
        element.compress().to_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self::Element> {
        const CONTEXT: &str = "edwards25519 decode";

        let encoded: [u8; ED25519_POINT_SIZE] = bytes.try_into().map_err(|_| {
            Error::encoding(
                CONTEXT,
                format!("expected {} bytes, got {}", ED25519_POINT_SIZE, bytes.len()),
            )
        })?;
        let point = CompressedEdwardsY(encoded)
            .decompress()
            .ok_or_else(|| Error::encoding(CONTEXT, "no curve point has this encoding"))?;
        // decompress() tolerates an unreduced y coordinate
        if point.compress().to_bytes() != encoded {
            return Err(Error::encoding(CONTEXT, "non-canonical point encoding"));
        }
        Ok(point)
    }

    fn is_identity(element: &Self::Element) -> bool {
        element.is_identity()
    }

    fn is_on_curve(element: &Self::Element) -> bool {
        // Decompression only ever yields curve points; round-trip to be sure
        // the element did not come from somewhere else
        CompressedEdwardsY(element.compress().to_bytes())
            .decompress()
            .is_some_and(|p| p == *element)
    }

    fn is_torsion_free(element: &Self::Element) -> bool {
        element.is_torsion_free()
    }
}
