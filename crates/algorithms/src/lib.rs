//! Isogeny-based cryptographic primitives with constant-time field arithmetic
//!
//! This crate provides the building blocks of CSIDH-512: arithmetic in the
//! 511-bit prime field, x-only Montgomery curve arithmetic, odd-degree
//! isogeny evaluation, the supersingularity test used for public-key
//! validation, and the randomized class-group action.
//!
//! # Security Features
//!
//! - Field arithmetic (add, sub, mul, exponentiation, swaps) runs in
//!   constant time with respect to its operands
//! - Routines that are only safe on public data carry a `_vartime` suffix
//! - Secret material (exponent vectors, sampler buffers) is zeroized on drop
//!
//! The crate is usable in `no_std` environments; the `std` feature only adds
//! `std::error::Error` impls and caches the backend choice.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Isogeny-based primitives
pub mod isogeny;
pub use isogeny::csidh;
