//! Error handling for key-exchange operations

use core::fmt;

use isocrypt_algorithms::error::Error as PrimitiveError;
use isocrypt_api::error::Error as CoreError;

/// Error type for key-exchange operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Invalid key format or content
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                reason,
            },
        }
    }
}

pub mod validate;
