//! NIST prime curves P-256, P-384 and P-521
//!
//! All three have cofactor one, so every point on the curve lies in the
//! prime-order group. Elements are exchanged as compressed SEC1 points; the
//! identity uses the one-byte SEC1 encoding `0x00`.

use dpake_api::GroupId;
use dpake_common::{SecretVec, ZeroizeGuard};
use dpake_params::traditional::ec::{
    P256_ORDER_BITS, P256_POINT_COMPRESSED_SIZE, P256_SCALAR_SIZE, P384_ORDER_BITS,
    P384_POINT_COMPRESSED_SIZE, P384_SCALAR_SIZE, P521_ORDER_BITS, P521_POINT_COMPRESSED_SIZE,
    P521_SCALAR_SIZE,
};
use elliptic_curve::ff::{Field, PrimeField};
use elliptic_curve::group::{Curve as _, Group as _};
use elliptic_curve::sec1::{Coordinates, FromEncodedPoint, ToEncodedPoint};
use zeroize::Zeroize;

use super::EcGroup;
use crate::error::{Error, Result};

macro_rules! impl_nist_group {
    (
        $name:ident, $krate:ident, $id:expr, $label:literal,
        $order_bits:expr, $scalar_len:expr, $element_len:expr
    ) => {
        #[doc = concat!("The ", $label, " group")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl EcGroup for $name {
            type Scalar = $krate::Scalar;
            type Element = $krate::ProjectivePoint;

            const ID: GroupId = $id;
            const ORDER_BITS: usize = $order_bits;
            const COFACTOR: u32 = 1;
            const SCALAR_LENGTH: usize = $scalar_len;
            const ELEMENT_LENGTH: usize = $element_len;

            fn generator() -> Self::Element {
                $krate::ProjectivePoint::GENERATOR
            }

            fn identity() -> Self::Element {
                $krate::ProjectivePoint::IDENTITY
            }

            fn nonzero_scalar_from_be_bytes(bytes: &[u8]) -> Option<Self::Scalar> {
                if bytes.len() != Self::SCALAR_LENGTH {
                    return None;
                }
                let mut repr = $krate::FieldBytes::clone_from_slice(bytes);
                let scalar = Option::<$krate::Scalar>::from($krate::Scalar::from_repr(repr));
                repr.as_mut_slice().zeroize();
                let scalar = scalar?;
                if bool::from(scalar.is_zero()) {
                    return None;
                }
                Some(scalar)
            }

            fn scalar_to_bytes(scalar: &Self::Scalar) -> SecretVec {
                let mut repr = scalar.to_repr();
                let repr = ZeroizeGuard::new(repr.as_mut_slice());
                SecretVec::from_slice(&repr)
            }

            fn mul_base(scalar: &Self::Scalar) -> Self::Element {
                $krate::ProjectivePoint::GENERATOR * *scalar
            }

            fn mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element {
                *element * *scalar
            }

            fn add(a: &Self::Element, b: &Self::Element) -> Self::Element {
                *a + *b
            }

            fn neg(element: &Self::Element) -> Self::Element {
                -*element
            }

            fn encode(element: &Self::Element) -> Vec<u8> {
                element.to_affine().to_encoded_point(true).as_bytes().to_vec()
            }

            fn decode(bytes: &[u8]) -> Result<Self::Element> {
                const CONTEXT: &str = concat!($label, " decode");

                let encoded = $krate::EncodedPoint::from_bytes(bytes)
                    .map_err(|_| Error::encoding(CONTEXT, "malformed SEC1 encoding"))?;
                match encoded.coordinates() {
                    Coordinates::Compressed { .. } | Coordinates::Identity => {}
                    _ => return Err(Error::encoding(CONTEXT, "point is not compressed")),
                }
                let affine = Option::<$krate::AffinePoint>::from(
                    $krate::AffinePoint::from_encoded_point(&encoded),
                )
                .ok_or_else(|| Error::encoding(CONTEXT, "no curve point has this encoding"))?;
                Ok(affine.into())
            }

            fn is_identity(element: &Self::Element) -> bool {
                bool::from(element.is_identity())
            }

            fn is_on_curve(element: &Self::Element) -> bool {
                let uncompressed = element.to_affine().to_encoded_point(false);
                bool::from(
                    $krate::AffinePoint::from_encoded_point(&uncompressed).is_some(),
                )
            }

            fn is_torsion_free(_element: &Self::Element) -> bool {
                // prime order, cofactor one
                true
            }
        }
    };
}

impl_nist_group!(
    NistP256,
    p256,
    GroupId::P256,
    "P-256",
    P256_ORDER_BITS,
    P256_SCALAR_SIZE,
    P256_POINT_COMPRESSED_SIZE
);

impl_nist_group!(
    NistP384,
    p384,
    GroupId::P384,
    "P-384",
    P384_ORDER_BITS,
    P384_SCALAR_SIZE,
    P384_POINT_COMPRESSED_SIZE
);

impl_nist_group!(
    NistP521,
    p521,
    GroupId::P521,
    "P-521",
    P521_ORDER_BITS,
    P521_SCALAR_SIZE,
    P521_POINT_COMPRESSED_SIZE
);
