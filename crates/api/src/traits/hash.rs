//! Streaming hash function interface
//!
//! The trait is object safe so that providers can be selected at runtime by
//! name and wrapped by adapters such as a truncating digest.

use crate::Result;

/// A streaming, fixed-output-length hash function.
///
/// `finalize_into` leaves the instance reset and ready to absorb a new
/// message, so a single object can be reused for independent digests.
pub trait HashFunction: Send + Sync {
    /// Absorb more input. May be called any number of times.
    fn update(&mut self, data: &[u8]);

    /// Write the digest into `out` and reset the state.
    ///
    /// `out` must be exactly [`output_length`](Self::output_length) bytes.
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<()>;

    /// Output length in bytes
    fn output_length(&self) -> usize;

    /// Identifier such as `SHA-256`, for diagnostics and registry lookup
    fn name(&self) -> String;

    /// Copy of this instance including everything absorbed so far
    fn copy_state(&self) -> Box<dyn HashFunction>;

    /// Fresh instance with the same configuration and no absorbed input
    fn new_object(&self) -> Box<dyn HashFunction>;

    /// Discard all absorbed input
    fn reset(&mut self);

    /// Output length in bits
    fn output_length_bits(&self) -> usize {
        self.output_length() * 8
    }

    /// Finalize into a freshly allocated buffer
    fn finalize(&mut self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.output_length()];
        self.finalize_into(&mut out)?;
        Ok(out)
    }
}

impl core::fmt::Debug for dyn HashFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HashFunction({})", self.name())
    }
}
