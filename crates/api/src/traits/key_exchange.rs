//! Trait definition for non-interactive key exchange
//!
//! A key exchange in this sense is a Diffie-Hellman style scheme: each party
//! publishes a public key derived from its secret key, and both parties
//! derive the same shared secret from their own secret key and the peer's
//! public key. Public keys must be validated before use; implementations
//! perform that validation inside [`KeyExchange::derive_shared_secret`].

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Diffie-Hellman style key exchange with domain-specific types.
///
/// # Security Design
///
/// The shared secret is only reachable through the `Ok` arm of
/// [`derive_shared_secret`](KeyExchange::derive_shared_secret), so a caller
/// cannot use a secret derived from a rejected public key by mistake.
pub trait KeyExchange {
    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type, zeroized on drop by its implementation.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type, zeroized on drop by its implementation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new secret key from the provided CSPRNG.
    ///
    /// # Errors
    /// Fails only if the randomness source fails.
    fn generate_secret_key<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::SecretKey>;

    /// Compute the public key matching `secret_key`.
    ///
    /// Some schemes need fresh randomness here even though the result is
    /// fully determined by the secret key.
    fn generate_public_key<R: CryptoRng + RngCore>(
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::PublicKey>;

    /// Check whether `public_key` is acceptable as a peer key.
    ///
    /// Returns `Ok(false)` for a well-formed but invalid key; `Err` is reserved
    /// for failures of the randomness source.
    fn validate_public_key<R: CryptoRng + RngCore>(
        public_key: &Self::PublicKey,
        rng: &mut R,
    ) -> Result<bool>;

    /// Validate the peer's `public_key` and derive the shared secret.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKey`](crate::Error::InvalidKey) if validation
    /// fails, or a randomness error if the source fails.
    fn derive_shared_secret<R: CryptoRng + RngCore>(
        public_key: &Self::PublicKey,
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SharedSecret>;

    /// Generate a secret key and its public key in one call.
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)> {
        let secret_key = Self::generate_secret_key(rng)?;
        let public_key = Self::generate_public_key(&secret_key, rng)?;
        Ok((public_key, secret_key))
    }
}
