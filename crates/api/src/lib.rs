//! Public API traits and types for the isocrypt library
//!
//! This crate provides the public API surface for the isocrypt ecosystem:
//! the shared error type, the byte serialization contracts and the
//! [`KeyExchange`] trait implemented by every key-agreement scheme.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{KeyExchange, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{key_exchange, serialize};
