//! Validation utilities shared by every dpake crate

use super::{Error, Result};

/// Validate a configuration condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::config(context, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a bit length against the bits a hash can supply
#[inline(always)]
pub fn bit_length(context: &'static str, bits: usize, available: usize) -> Result<()> {
    if bits == 0 {
        return Err(Error::config(context, "bit length must be positive"));
    }
    if bits > available {
        return Err(Error::config(
            context,
            format!("{} bits requested but only {} available", bits, available),
        ));
    }
    Ok(())
}
