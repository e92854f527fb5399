//! Error type definitions for cryptographic operations

#[cfg(not(feature = "std"))]
use core::fmt;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Invalid key error
    #[cfg_attr(feature = "std", error("Invalid key: {context}: {reason}"))]
    InvalidKey {
        /// Operation or key type that rejected the key
        context: &'static str,
        /// Why the key was rejected
        reason: &'static str,
    },

    /// Invalid length error with context
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        /// Buffer that had the wrong length
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("Invalid parameter: {context}: {reason}"))]
    InvalidParameter {
        /// Parameter name
        context: &'static str,
        /// Why the parameter is invalid
        reason: &'static str,
    },

    /// The randomness source failed to produce bytes
    #[cfg_attr(feature = "std", error("Random generation error: {context}"))]
    RandomGenerationError {
        /// Operation that was drawing randomness
        context: &'static str,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { reason, .. } => Self::InvalidKey { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
        }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { context, reason } => {
                write!(f, "Invalid key: {}: {}", context, reason)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidParameter { context, reason } => {
                write!(f, "Invalid parameter: {}: {}", context, reason)
            }
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
        }
    }
}
