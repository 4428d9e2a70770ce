//! Configuration shared by both peers
//!
//! [`Parameters`] holds everything the two sides must agree on bit for bit
//! and derives the password scalar `w` exactly once, when it is built.

use core::fmt;

use dpake_algorithms::{bits_to_int, EcGroup, HashRegistry, TruncatedHash};
use dpake_api::error::validate;
use dpake_api::{Error, GroupId, HashFunction, Result};
use dpake_common::{barrier, SecretVec};
use dpake_params::pake::spake2::{SPAKE2_MAX_SCALAR_ATTEMPTS, SPAKE2_W_DST};
use tracing::trace;
use zeroize::Zeroize;

use crate::secret::SharedSecret;
use crate::transcript::absorb_prefixed;

/// Hash used when none is configured
pub const DEFAULT_HASH: &str = "SHA-256";

/// Builder for [`Parameters`]
///
/// Every field except the password has a default: empty identities and
/// context, [`DEFAULT_HASH`], and a shared secret of the hash's native
/// length. When a group name is configured it must name the group the
/// parameters are built for.
pub struct ParametersBuilder {
    group: Option<String>,
    password: SecretVec,
    id_a: Vec<u8>,
    id_b: Vec<u8>,
    context: Vec<u8>,
    hash_name: String,
    shared_secret_bits: Option<usize>,
}

impl ParametersBuilder {
    /// A builder with default settings and no password
    pub fn new() -> Self {
        Self {
            group: None,
            password: SecretVec::default(),
            id_a: Vec::new(),
            id_b: Vec::new(),
            context: Vec::new(),
            hash_name: DEFAULT_HASH.to_string(),
            shared_secret_bits: None,
        }
    }

    /// Name of the group, as understood by [`GroupId::from_name`]
    pub fn group(mut self, name: &str) -> Self {
        self.group = Some(name.to_string());
        self
    }

    /// The shared password
    pub fn password(mut self, password: &[u8]) -> Self {
        self.password = SecretVec::from_slice(password);
        self
    }

    /// Identities of the A and B roles
    pub fn identities(mut self, id_a: &[u8], id_b: &[u8]) -> Self {
        self.id_a = id_a.to_vec();
        self.id_b = id_b.to_vec();
        self
    }

    /// Application context bound into the password scalar
    pub fn context(mut self, context: &[u8]) -> Self {
        self.context = context.to_vec();
        self
    }

    /// Name of the hash, as understood by [`HashRegistry::create`]
    pub fn hash(mut self, name: &str) -> Self {
        self.hash_name = name.to_string();
        self
    }

    /// Produce shared secrets of exactly `bits` bits
    pub fn shared_secret_bits(mut self, bits: usize) -> Self {
        self.shared_secret_bits = Some(bits);
        self
    }

    /// Validate the settings and derive the password scalar for group `G`
    ///
    /// Fails with a configuration error if the configured group name is
    /// unknown or names a group other than `G`, the password is empty, the
    /// hash is unknown to `registry`, the hash is shorter than the group order,
    /// or the requested shared secret length is out of range.
    pub fn build<G: EcGroup>(&self, registry: &HashRegistry) -> Result<Parameters<G>> {
        const CONTEXT: &str = "Parameters::new";

        if let Some(name) = &self.group {
            let group = GroupId::from_name(name).map_err(|err| err.with_context(CONTEXT))?;
            if group != G::ID {
                return Err(Error::config(
                    CONTEXT,
                    format!("group {} was configured but parameters are for {}", group, G::ID),
                ));
            }
        }

        validate::parameter(!self.password.is_empty(), CONTEXT, "password must not be empty")?;

        let hash = registry.create(&self.hash_name)?;
        let hash_bits = hash.output_length_bits();
        if hash_bits < G::ORDER_BITS {
            return Err(Error::config(
                CONTEXT,
                format!(
                    "{} produces {} bits but {} needs at least {}",
                    hash.name(),
                    hash_bits,
                    G::ID,
                    G::ORDER_BITS
                ),
            ));
        }
        if let Some(bits) = self.shared_secret_bits {
            validate::bit_length(CONTEXT, bits, hash_bits)?;
        }

        let (m, n) = G::fixed_points()?;
        let w = derive_w::<G>(
            hash.as_ref(),
            self.password.as_slice(),
            &self.id_a,
            &self.id_b,
            &self.context,
        )?;

        trace!(
            group = %G::ID,
            hash = %hash.name(),
            id_a_len = self.id_a.len(),
            id_b_len = self.id_b.len(),
            context_len = self.context.len(),
            "SPAKE2 parameters ready"
        );

        Ok(Parameters {
            password: self.password.clone(),
            id_a: self.id_a.clone(),
            id_b: self.id_b.clone(),
            context: self.context.clone(),
            hash,
            shared_secret_bits: self.shared_secret_bits,
            m,
            n,
            w,
        })
    }
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParametersBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametersBuilder")
            .field("group", &self.group)
            .field("password", &self.password)
            .field("id_a_len", &self.id_a.len())
            .field("id_b_len", &self.id_b.len())
            .field("context_len", &self.context.len())
            .field("hash", &self.hash_name)
            .field("shared_secret_bits", &self.shared_secret_bits)
            .finish()
    }
}

/// Immutable SPAKE2 configuration for group `G`
///
/// Read-only once built, so any number of contexts may borrow it at once.
/// The password and the derived scalar are wiped when it is dropped.
pub struct Parameters<G: EcGroup> {
    password: SecretVec,
    id_a: Vec<u8>,
    id_b: Vec<u8>,
    context: Vec<u8>,
    hash: Box<dyn HashFunction>,
    shared_secret_bits: Option<usize>,
    m: G::Element,
    n: G::Element,
    w: G::Scalar,
}

impl<G: EcGroup> Parameters<G> {
    /// Build parameters from the six inputs both peers must share
    pub fn new(
        registry: &HashRegistry,
        hash_name: &str,
        password: &[u8],
        id_a: &[u8],
        id_b: &[u8],
        context: &[u8],
    ) -> Result<Self> {
        ParametersBuilder::new()
            .hash(hash_name)
            .password(password)
            .identities(id_a, id_b)
            .context(context)
            .build(registry)
    }

    /// A builder with default settings
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::new()
    }

    /// The group
    pub fn group(&self) -> GroupId {
        G::ID
    }

    /// Identity of the A role
    pub fn id_a(&self) -> &[u8] {
        &self.id_a
    }

    /// Identity of the B role
    pub fn id_b(&self) -> &[u8] {
        &self.id_b
    }

    /// Application context
    pub fn context(&self) -> &[u8] {
        &self.context
    }

    /// Name of the hash
    pub fn hash_name(&self) -> String {
        self.hash.name()
    }

    /// Length of the shared secret in bits
    pub fn shared_secret_bits(&self) -> usize {
        self.shared_secret_bits
            .unwrap_or_else(|| self.hash.output_length_bits())
    }

    pub(crate) fn m(&self) -> &G::Element {
        &self.m
    }

    pub(crate) fn n(&self) -> &G::Element {
        &self.n
    }

    pub(crate) fn w(&self) -> &G::Scalar {
        &self.w
    }

    /// Hash a finished transcript into the shared secret
    pub(crate) fn derive_secret(&self, transcript: &[u8]) -> Result<SharedSecret> {
        let mut hash = self.hash.new_object();
        if let Some(bits) = self.shared_secret_bits {
            hash = Box::new(TruncatedHash::new(hash, bits)?);
        }
        hash.update(transcript);
        let mut secret = SecretVec::zeroed(hash.output_length());
        hash.finalize_into(secret.as_mut_slice())?;
        Ok(SharedSecret::new(secret))
    }
}

impl<G: EcGroup> Clone for Parameters<G> {
    fn clone(&self) -> Self {
        Self {
            password: self.password.clone(),
            id_a: self.id_a.clone(),
            id_b: self.id_b.clone(),
            context: self.context.clone(),
            hash: self.hash.new_object(),
            shared_secret_bits: self.shared_secret_bits,
            m: self.m,
            n: self.n,
            w: self.w,
        }
    }
}

impl<G: EcGroup> Drop for Parameters<G> {
    fn drop(&mut self) {
        barrier::with_barriers(|| self.w.zeroize());
    }
}

impl<G: EcGroup> fmt::Debug for Parameters<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameters")
            .field("group", &G::ID)
            .field("hash", &self.hash.name())
            .field("password", &self.password)
            .field("id_a_len", &self.id_a.len())
            .field("id_b_len", &self.id_b.len())
            .field("context_len", &self.context.len())
            .field("shared_secret_bits", &self.shared_secret_bits())
            .finish_non_exhaustive()
    }
}

/// Derive the password scalar `w` in `[1, n-1]`
///
/// Each attempt hashes
/// `DST || lp(hash) || lp(password) || lp(id_A) || lp(id_B) || lp(context) || counter`
/// down to exactly `ORDER_BITS` bits and keeps the first value below the
/// group order. Rejecting instead of reducing keeps `w` unbiased.
fn derive_w<G: EcGroup>(
    prototype: &dyn HashFunction,
    password: &[u8],
    id_a: &[u8],
    id_b: &[u8],
    context: &[u8],
) -> Result<G::Scalar> {
    let hash_name = prototype.name();
    let mut hash = TruncatedHash::new(prototype.new_object(), G::ORDER_BITS)?;
    let mut candidate = SecretVec::zeroed(hash.output_length());

    for counter in 0..SPAKE2_MAX_SCALAR_ATTEMPTS {
        hash.update(SPAKE2_W_DST);
        for field in [hash_name.as_bytes(), password, id_a, id_b, context] {
            absorb_prefixed(&mut hash, field);
        }
        hash.update(&counter.to_be_bytes());
        hash.finalize_into(candidate.as_mut_slice())?;

        bits_to_int(candidate.as_mut_slice(), G::ORDER_BITS);
        if let Some(w) = G::nonzero_scalar_from_be_bytes(candidate.as_slice()) {
            trace!(group = %G::ID, attempts = counter + 1, "derived password scalar");
            return Ok(w);
        }
    }

    Err(Error::config(
        "Parameters::derive_w",
        "no password scalar found within the attempt budget",
    ))
}
