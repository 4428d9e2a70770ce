//! Fixed-output hash providers backed by the RustCrypto `sha2` and `sha3` crates

use digest::Digest;
use dpake_api::HashFunction;
use dpake_common::ZeroizeGuard;
use dpake_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA3_224_OUTPUT_SIZE,
    SHA3_256_OUTPUT_SIZE, SHA3_384_OUTPUT_SIZE, SHA3_512_OUTPUT_SIZE, SHA512_256_OUTPUT_SIZE,
    SHA512_OUTPUT_SIZE,
};

use crate::error::{validate, Result};

macro_rules! impl_digest_provider {
    ($name:ident, $inner:ty, $id:literal, $out:expr) => {
        #[doc = concat!("Streaming ", $id, " provider")]
        #[derive(Clone, Default)]
        pub struct $name {
            state: $inner,
        }

        impl $name {
            /// Registry name of this hash
            pub const NAME: &'static str = $id;

            /// Create a fresh instance
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl HashFunction for $name {
            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.state, data);
            }

            fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
                validate::length(concat!($id, " finalize"), out.len(), $out)?;
                let mut digest = self.state.finalize_reset();
                let digest = ZeroizeGuard::new(digest.as_mut_slice());
                out.copy_from_slice(&digest);
                Ok(())
            }

            #[inline(always)]
            fn output_length(&self) -> usize {
                $out
            }

            fn name(&self) -> String {
                $id.to_string()
            }

            fn copy_state(&self) -> Box<dyn HashFunction> {
                Box::new(self.clone())
            }

            fn new_object(&self) -> Box<dyn HashFunction> {
                Box::new(Self::new())
            }

            fn reset(&mut self) {
                Digest::reset(&mut self.state);
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($id)
            }
        }
    };
}

impl_digest_provider!(Sha224, sha2::Sha224, "SHA-224", SHA224_OUTPUT_SIZE);
impl_digest_provider!(Sha256, sha2::Sha256, "SHA-256", SHA256_OUTPUT_SIZE);
impl_digest_provider!(Sha384, sha2::Sha384, "SHA-384", SHA384_OUTPUT_SIZE);
impl_digest_provider!(Sha512, sha2::Sha512, "SHA-512", SHA512_OUTPUT_SIZE);
impl_digest_provider!(Sha512_256, sha2::Sha512_256, "SHA-512-256", SHA512_256_OUTPUT_SIZE);
impl_digest_provider!(Sha3_224, sha3::Sha3_224, "SHA-3(224)", SHA3_224_OUTPUT_SIZE);
impl_digest_provider!(Sha3_256, sha3::Sha3_256, "SHA-3(256)", SHA3_256_OUTPUT_SIZE);
impl_digest_provider!(Sha3_384, sha3::Sha3_384, "SHA-3(384)", SHA3_384_OUTPUT_SIZE);
impl_digest_provider!(Sha3_512, sha3::Sha3_512, "SHA-3(512)", SHA3_512_OUTPUT_SIZE);
