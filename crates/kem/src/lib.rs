//! Key exchange schemes
//!
//! This crate implements non-interactive, Diffie-Hellman style key exchange
//! on top of the isogeny primitives in `isocrypt-algorithms`. Every scheme
//! implements [`isocrypt_api::KeyExchange`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod csidh;
pub mod error;

// Re-exports
pub use csidh::{Csidh512, Csidh512PublicKey, Csidh512SecretKey, Csidh512SharedSecret};
