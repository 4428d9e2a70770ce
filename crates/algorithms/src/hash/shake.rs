//! SHAKE exposed as fixed-length hash functions
//!
//! The output length is fixed when the instance is created and becomes part
//! of its name, e.g. `SHAKE-256(512)`.

use digest::{ExtendableOutputReset, Update};
use dpake_api::HashFunction;
use dpake_params::utils::hash::SHAKE_MAX_OUTPUT_BITS;

use crate::error::{validate, Result};

fn check_output_bits(context: &'static str, output_bits: usize) -> Result<usize> {
    validate::bit_length(context, output_bits, SHAKE_MAX_OUTPUT_BITS)?;
    validate::parameter(
        output_bits % 8 == 0,
        context,
        "output length must be a whole number of bytes",
    )?;
    Ok(output_bits / 8)
}

macro_rules! impl_shake_variant {
    ($name:ident, $inner:ty, $prefix:literal) => {
        #[doc = concat!($prefix, " with a fixed output length")]
        #[derive(Clone)]
        pub struct $name {
            state: $inner,
            output_len: usize,
        }

        impl $name {
            /// Create an instance producing `output_bits` bits
            ///
            /// `output_bits` must be a positive multiple of 8.
            pub fn new(output_bits: usize) -> Result<Self> {
                let output_len = check_output_bits(concat!($prefix, "::new"), output_bits)?;
                Ok(Self {
                    state: <$inner>::default(),
                    output_len,
                })
            }
        }

        impl HashFunction for $name {
            fn update(&mut self, data: &[u8]) {
                Update::update(&mut self.state, data);
            }

            fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
                validate::length(concat!($prefix, " finalize"), out.len(), self.output_len)?;
                self.state.finalize_xof_reset_into(out);
                Ok(())
            }

            fn output_length(&self) -> usize {
                self.output_len
            }

            fn name(&self) -> String {
                format!("{}({})", $prefix, self.output_len * 8)
            }

            fn copy_state(&self) -> Box<dyn HashFunction> {
                Box::new(self.clone())
            }

            fn new_object(&self) -> Box<dyn HashFunction> {
                Box::new(Self {
                    state: <$inner>::default(),
                    output_len: self.output_len,
                })
            }

            fn reset(&mut self) {
                digest::Reset::reset(&mut self.state);
            }
        }
    };
}

impl_shake_variant!(Shake128, sha3::Shake128, "SHAKE-128");
impl_shake_variant!(Shake256, sha3::Shake256, "SHAKE-256");
