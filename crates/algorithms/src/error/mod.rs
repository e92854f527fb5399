//! Error handling for isogeny primitives

use core::fmt;

use isocrypt_api::Error as CoreError;

/// The error type for isogeny primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The randomness source failed
    Randomness {
        /// Operation that was drawing random bytes
        context: &'static str,
    },
}

/// Result type for isogeny primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::Randomness { context } => {
                write!(f, "Randomness source failed during {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Randomness { context } => CoreError::RandomGenerationError { context },
        }
    }
}

// Include the validation submodule
pub mod validate;
