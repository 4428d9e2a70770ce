//! Error handling for the dpake ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export validation utilities module (not as a nested function)
pub use validate as validation;

// Specialized result types for different operations
pub type HashResult<T> = Result<T>;
pub type GroupResult<T> = Result<T>;
pub type ProtocolResult<T> = Result<T>;
