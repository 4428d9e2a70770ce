//! Constant values for dpake operations
//!
//! This crate holds the sizes and fixed values shared across the dpake
//! workspace. It has no dependencies and no code beyond constants.

#![no_std]

pub mod pake;
pub mod traditional;
pub mod utils;
