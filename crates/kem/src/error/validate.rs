//! Validation utilities for key-exchange operations

use super::{Error, Result};

/// Validate key content
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

// Re-export the length check for key encodings
pub use isocrypt_api::error::validate::length;
