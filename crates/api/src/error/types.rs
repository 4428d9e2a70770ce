//! Error type definitions for password-authenticated key exchange

use std::string::String;

/// Primary error type for dpake operations
///
/// Every variant carries the operation that failed as a static context
/// string. Details never contain secret material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid configuration: bad bit length, unsupported group or hash,
    /// empty password, or a hash too short for the requested derivation
    #[error("configuration error in {context}: {message}")]
    Configuration {
        context: &'static str,
        message: String,
    },

    /// Operation invoked out of the required sequence, including double use
    #[error("state error in {context}: {message}")]
    State {
        context: &'static str,
        message: String,
    },

    /// Peer group element failed the identity, curve or subgroup checks
    #[error("invalid peer element in {context}: {reason}")]
    InvalidPeerElement {
        context: &'static str,
        reason: &'static str,
    },

    /// Malformed point encoding
    #[error("encoding error in {context}: {message}")]
    Encoding {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The randomness source reported a failure
    #[error("random generation error in {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for dpake operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `Configuration` error
    pub fn config(context: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `State` error
    pub fn state(context: &'static str, message: impl Into<String>) -> Self {
        Self::State {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidPeerElement` error
    pub fn invalid_peer(context: &'static str, reason: &'static str) -> Self {
        Self::InvalidPeerElement { context, reason }
    }

    /// Shorthand to create an `Encoding` error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::Encoding {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Configuration { message, .. } => Self::Configuration { context, message },
            Self::State { message, .. } => Self::State { context, message },
            Self::InvalidPeerElement { reason, .. } => Self::InvalidPeerElement { context, reason },
            Self::Encoding { message, .. } => Self::Encoding { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
        }
    }

    /// The static context recorded when the error was raised
    pub fn context(&self) -> &'static str {
        match self {
            Self::Configuration { context, .. }
            | Self::State { context, .. }
            | Self::InvalidPeerElement { context, .. }
            | Self::Encoding { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::RandomGeneration { context, .. } => context,
        }
    }

    /// Whether the error came from malformed or malicious peer input
    pub fn is_peer_error(&self) -> bool {
        matches!(self, Self::InvalidPeerElement { .. } | Self::Encoding { .. })
    }
}
