//! Bit-exact truncation of a hash output
//!
//! [`TruncatedHash`] wraps any [`HashFunction`] and emits only the leading
//! `output_bits` bits of its digest. When the bit count is not a multiple of
//! eight the unused low-order bits of the final byte are cleared, so two
//! truncations to different bit lengths never agree on their last byte by
//! accident.

use dpake_api::HashFunction;
use dpake_common::SecretVec;

use crate::error::{validate, Result};

/// A hash whose output is the first `output_bits` bits of an inner hash
pub struct TruncatedHash {
    inner: Box<dyn HashFunction>,
    output_bits: usize,
}

impl TruncatedHash {
    /// Wrap `inner`, keeping `output_bits` bits of its digest
    ///
    /// Fails with a configuration error if `output_bits` is zero or larger
    /// than the inner hash can supply.
    pub fn new(inner: Box<dyn HashFunction>, output_bits: usize) -> Result<Self> {
        validate::bit_length("TruncatedHash::new", output_bits, inner.output_length_bits())?;
        Ok(Self { inner, output_bits })
    }

    /// Number of bits in the output
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// The wrapped hash
    pub fn inner(&self) -> &dyn HashFunction {
        self.inner.as_ref()
    }
}

impl HashFunction for TruncatedHash {
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        validate::length("TruncatedHash::finalize", out.len(), self.output_length())?;

        // Dropping the scratch buffer wipes it on every path out of here
        let mut full = SecretVec::zeroed(self.inner.output_length());
        self.inner.finalize_into(full.as_mut_slice())?;
        out.copy_from_slice(&full.as_slice()[..out.len()]);

        let bits_in_last_byte = ((self.output_bits - 1) % 8) + 1;
        if let Some(last) = out.last_mut() {
            *last &= 0xFFu8 << (8 - bits_in_last_byte);
        }
        Ok(())
    }

    fn output_length(&self) -> usize {
        self.output_bits.div_ceil(8)
    }

    fn output_length_bits(&self) -> usize {
        self.output_bits
    }

    fn name(&self) -> String {
        format!("Truncated({},{})", self.inner.name(), self.output_bits)
    }

    fn copy_state(&self) -> Box<dyn HashFunction> {
        Box::new(Self {
            inner: self.inner.copy_state(),
            output_bits: self.output_bits,
        })
    }

    fn new_object(&self) -> Box<dyn HashFunction> {
        Box::new(Self {
            inner: self.inner.new_object(),
            output_bits: self.output_bits,
        })
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl core::fmt::Debug for TruncatedHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name())
    }
}
