//! Constant-time comparison and memory barrier helpers

use subtle::{Choice, ConstantTimeEq};

/// Trait for types that can be securely compared
///
/// Comparisons run in time independent of where the inputs differ.
/// Inputs of different lengths compare unequal without inspecting contents.
pub trait SecureCompare {
    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self.secure_cmp(other))
    }

    /// Compare two values and return a constant-time choice
    fn secure_cmp(&self, other: &Self) -> Choice;
}

impl SecureCompare for [u8] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        if self.len() != other.len() {
            return Choice::from(0);
        }
        self.ct_eq(other)
    }
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        self.ct_eq(other)
    }
}

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Execute a closure with compiler fences before and after
    #[inline(always)]
    pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
        compiler_fence_seq_cst();
        let result = f();
        compiler_fence_seq_cst();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_compare_slices() {
        let a: &[u8] = &[1, 2, 3];
        let b: &[u8] = &[1, 2, 3];
        let c: &[u8] = &[1, 2, 4];
        let d: &[u8] = &[1, 2];
        assert!(a.secure_eq(b));
        assert!(!a.secure_eq(c));
        assert!(!a.secure_eq(d));
    }

    #[test]
    fn test_secure_compare_arrays() {
        assert!([7u8; 16].secure_eq(&[7u8; 16]));
        assert!(!bool::from([7u8; 16].secure_cmp(&[8u8; 16])));
    }

    #[test]
    fn test_with_barriers_returns_value() {
        assert_eq!(barrier::with_barriers(|| 41 + 1), 42);
    }
}
