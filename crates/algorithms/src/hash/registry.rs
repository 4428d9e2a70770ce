//! Name-based lookup of hash providers
//!
//! A [`HashRegistry`] is an ordinary value: callers build one, optionally
//! register their own providers, and pass it to whatever needs to resolve a
//! hash by name. There is no process-wide table.

use std::collections::BTreeMap;
use std::fmt;

use dpake_api::HashFunction;
use tracing::trace;

use super::providers::{
    Sha224, Sha256, Sha384, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha512, Sha512_256,
};
use super::shake::{Shake128, Shake256};
use super::truncated::TruncatedHash;
use crate::error::{Error, Result};

/// Factory producing a fresh hash instance
pub type HashConstructor = Box<dyn Fn() -> Box<dyn HashFunction> + Send + Sync>;

/// Registry of hash constructors keyed by name
///
/// Besides the registered names, [`create`](Self::create) understands the
/// parameterised forms `SHAKE-128(bits)`, `SHAKE-256(bits)` and
/// `Truncated(<name>,<bits>)`, where `<name>` is itself resolved through the
/// registry.
pub struct HashRegistry {
    constructors: BTreeMap<String, HashConstructor>,
}

impl HashRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// A registry holding every built-in fixed-output provider
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Sha224::NAME, || Box::new(Sha224::new()));
        registry.register(Sha256::NAME, || Box::new(Sha256::new()));
        registry.register(Sha384::NAME, || Box::new(Sha384::new()));
        registry.register(Sha512::NAME, || Box::new(Sha512::new()));
        registry.register(Sha512_256::NAME, || Box::new(Sha512_256::new()));
        registry.register(Sha3_224::NAME, || Box::new(Sha3_224::new()));
        registry.register(Sha3_256::NAME, || Box::new(Sha3_256::new()));
        registry.register(Sha3_384::NAME, || Box::new(Sha3_384::new()));
        registry.register(Sha3_512::NAME, || Box::new(Sha3_512::new()));
        registry
    }

    /// Register `constructor` under `name`, replacing any previous entry
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn HashFunction> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
    }

    /// Whether `name` resolves to a hash
    pub fn contains(&self, name: &str) -> bool {
        self.create(name).is_ok()
    }

    /// Registered names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Build a fresh instance of the hash called `name`
    pub fn create(&self, name: &str) -> Result<Box<dyn HashFunction>> {
        if let Some(constructor) = self.constructors.get(name) {
            return Ok(constructor());
        }

        if let Some(bits) = parse_call(name, "SHAKE-128") {
            trace!(hash = name, "resolving parameterised SHAKE-128");
            return Ok(Box::new(Shake128::new(parse_bits(name, bits)?)?));
        }
        if let Some(bits) = parse_call(name, "SHAKE-256") {
            trace!(hash = name, "resolving parameterised SHAKE-256");
            return Ok(Box::new(Shake256::new(parse_bits(name, bits)?)?));
        }
        if let Some(args) = parse_call(name, "Truncated") {
            let (inner, bits) = args.rsplit_once(',').ok_or_else(|| {
                Error::config(
                    "HashRegistry::create",
                    format!("'{}' must have the form Truncated(<hash>,<bits>)", name),
                )
            })?;
            trace!(hash = name, inner, "resolving truncated hash");
            let inner = self.create(inner.trim())?;
            return Ok(Box::new(TruncatedHash::new(inner, parse_bits(name, bits)?)?));
        }

        Err(Error::config(
            "HashRegistry::create",
            format!("unknown hash function '{}'", name),
        ))
    }
}

impl Default for HashRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for HashRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Return the argument list of `name` if it reads `<function>(<args>)`
fn parse_call<'a>(name: &'a str, function: &str) -> Option<&'a str> {
    name.strip_prefix(function)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_bits(name: &str, bits: &str) -> Result<usize> {
    bits.trim().parse().map_err(|_| {
        Error::config(
            "HashRegistry::create",
            format!("invalid bit length in '{}'", name),
        )
    })
}
