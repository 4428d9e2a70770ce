//! The secret both peers agree on

use core::fmt;

use dpake_common::{SecretVec, SecureCompare};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Output of a completed exchange
///
/// Wiped when dropped. Equality runs in constant time and `Debug` never
/// shows the contents.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(SecretVec);

impl SharedSecret {
    pub(crate) fn new(bytes: SecretVec) -> Self {
        Self(bytes)
    }

    /// The secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret is empty, which a completed exchange never yields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_bytes().secure_cmp(other.as_bytes())
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret(len={}, [REDACTED])", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_requires_equal_length() {
        let short = SharedSecret::new(SecretVec::from_slice(&[0xAB; 16]));
        let long = SharedSecret::new(SecretVec::from_slice(&[0xAB; 32]));
        assert_ne!(short, long);
        assert!(!bool::from(long.ct_eq(&short)));

        let same = SharedSecret::new(SecretVec::from_slice(&[0xAB; 16]));
        assert_eq!(short, same);
        assert!(bool::from(short.ct_eq(&same)));

        let mut last_differs = [0xAB; 16];
        last_differs[15] = 0xAA;
        let flipped = SharedSecret::new(SecretVec::from_slice(&last_differs));
        assert_ne!(short, flipped);
    }
}
