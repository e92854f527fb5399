//! # isocrypt
//!
//! Isogeny-based key exchange in pure Rust: CSIDH-512 with constant-time
//! field arithmetic and a runtime-selected accelerated backend.
//!
//! ## Usage
//!
//! ```rust
//! use isocrypt::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
//! let (alice_pk, alice_sk) = Csidh512::keypair(&mut rng)?;
//! let (bob_pk, bob_sk) = Csidh512::keypair(&mut rng)?;
//!
//! let alice_ss = Csidh512::derive_shared_secret(&bob_pk, &alice_sk, &mut rng)?;
//! let bob_ss = Csidh512::derive_shared_secret(&alice_pk, &bob_sk, &mut rng)?;
//! assert_eq!(alice_ss, bob_ss);
//! # Ok::<(), isocrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and a cached backend choice
//! - `kem` (default): the [`Csidh512`](kem::Csidh512) key exchange
//! - `algorithms`: the raw field, curve and group-action layers
//! - `serde`: serde support for public keys
//! - `portable`: always use the portable field backend
//! - `full`: all of the above except `portable`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - `isocrypt-api`: error type and the `KeyExchange` trait
//! - `isocrypt-params`: CSIDH-512 constants
//! - `isocrypt-algorithms`: field, curve, supersingularity test, group action
//! - `isocrypt-kem`: key types and the `Csidh512` scheme

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use isocrypt_api as api;
pub use isocrypt_internal as internal;
pub use isocrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use isocrypt_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use isocrypt_kem as kem;

/// Common imports for isocrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyExchange, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::api::SecretBytes;

    #[cfg(feature = "kem")]
    pub use crate::kem::{Csidh512, Csidh512PublicKey, Csidh512SecretKey, Csidh512SharedSecret};

    pub use rand::{CryptoRng, RngCore};
    pub use zeroize::{Zeroize, Zeroizing};
}
