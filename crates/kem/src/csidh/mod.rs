//! CSIDH-512 key exchange
//!
//! Commutative Supersingular Isogeny Diffie-Hellman over the 511-bit prime
//! of the CSIDH-512 parameter set. Both parties start from the curve
//! y^2 = x^3 + x (coefficient A = 0), apply their secret exponent vector
//! through the class-group action, and publish the resulting coefficient.
//! Applying one's own secret to the peer's coefficient yields the shared
//! curve.
//!
//! # Encodings
//!
//! - Secret key: 37 bytes, two signed 4-bit exponents per byte (even index
//!   in the low nibble)
//! - Public key: 64 bytes, the coefficient A in Montgomery form as eight
//!   little-endian 64-bit words
//! - Shared secret: 64 bytes, same layout as a public key
//!
//! # Security Notes
//!
//! - Public-key import only checks the length; the supersingularity test
//!   runs in [`Csidh512::validate_public_key`] and again inside
//!   [`Csidh512::derive_shared_secret`], which refuses invalid keys
//! - Secret keys and shared secrets are zeroized on drop, compare in
//!   constant time and never print their contents
//! - The exported shared secret is a curve coefficient, not uniformly
//!   random bytes; run it through a KDF before use as a symmetric key

use alloc::vec::Vec;
use core::fmt;

use crate::error::{validate, Error as KemError};
use isocrypt_algorithms::csidh::{
    group_action, validate_coefficient, Fp, SecretExponents, CSIDH_PUBLIC_KEY_SIZE,
    CSIDH_SHARED_SECRET_SIZE,
};
use isocrypt_algorithms::error::Error as PrimitiveError;
use isocrypt_api::{
    Error as ApiError, KeyExchange, Result as ApiResult, SecretBytes, Serialize, SerializeSecret,
};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(feature = "serde")]
mod serde_impl;

/// CSIDH-512 key exchange
pub struct Csidh512;

/// Public key for CSIDH-512: the Montgomery coefficient of a curve
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Csidh512PublicKey(Fp);

/// Secret key for CSIDH-512: 74 exponents in [-5, 5]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Csidh512SecretKey(SecretExponents);

/// Shared secret from CSIDH-512
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq)]
pub struct Csidh512SharedSecret(SecretBytes<CSIDH_SHARED_SECRET_SIZE>);

fn primitive_error(err: PrimitiveError, context: &'static str) -> ApiError {
    ApiError::from(KemError::from(err)).with_context(context)
}

impl Csidh512PublicKey {
    /// Import a public key from its 64-byte encoding.
    ///
    /// Only the length is checked. Call [`Csidh512::validate_public_key`]
    /// before trusting a key received from a peer.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("Csidh512PublicKey::from_bytes", bytes.len(), CSIDH_PUBLIC_KEY_SIZE)?;
        let array: &[u8; CSIDH_PUBLIC_KEY_SIZE] = bytes.try_into()?;
        Ok(Self(Fp::from_le_bytes(array)))
    }

    /// Export the public key as 64 bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }

    /// Export the public key as a fixed-size array
    pub fn to_array(&self) -> [u8; CSIDH_PUBLIC_KEY_SIZE] {
        self.0.to_le_bytes()
    }

    /// The curve coefficient A in Montgomery form
    pub fn coefficient(&self) -> &Fp {
        &self.0
    }
}

impl fmt::Debug for Csidh512PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Csidh512PublicKey(")?;
        for b in self.to_array() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl Serialize for Csidh512PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Csidh512PublicKey::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Csidh512PublicKey::to_bytes(self)
    }
}

impl Csidh512SecretKey {
    /// Import a secret key from its 37-byte packed encoding.
    ///
    /// Fails on a wrong length or on any nibble outside [-5, 5].
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        SecretExponents::from_packed(bytes)
            .map(Self)
            .map_err(|e| primitive_error(e, "Csidh512SecretKey::from_bytes"))
    }

    /// Export the packed exponents; the buffer is zeroized on drop
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut packed = self.0.to_packed();
        let out = Zeroizing::new(packed.to_vec());
        packed.zeroize();
        out
    }

    /// Exponent for the `i`-th small prime
    pub fn exponent(&self, i: usize) -> i8 {
        self.0.get(i)
    }
}

impl ConstantTimeEq for Csidh512SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Csidh512SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Csidh512SecretKey {}

impl fmt::Debug for Csidh512SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Csidh512SecretKey([REDACTED])")
    }
}

impl SerializeSecret for Csidh512SecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Csidh512SecretKey::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}

impl Csidh512SharedSecret {
    /// Import a shared secret from 64 bytes
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        SecretBytes::from_slice(bytes)
            .map(Self)
            .map_err(|e| e.with_context("Csidh512SharedSecret::from_bytes"))
    }

    /// Borrow the 64-byte encoding of the shared curve coefficient
    pub fn as_bytes(&self) -> &[u8; CSIDH_SHARED_SECRET_SIZE] {
        &self.0
    }

    /// Export the shared secret; the buffer is zeroized on drop
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }
}

impl fmt::Debug for Csidh512SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Csidh512SharedSecret([REDACTED])")
    }
}

impl SerializeSecret for Csidh512SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Csidh512SharedSecret::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}

impl KeyExchange for Csidh512 {
    type PublicKey = Csidh512PublicKey;
    type SecretKey = Csidh512SecretKey;
    type SharedSecret = Csidh512SharedSecret;

    fn name() -> &'static str {
        "CSIDH-512"
    }

    fn generate_secret_key<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::SecretKey> {
        SecretExponents::random(rng)
            .map(Csidh512SecretKey)
            .map_err(|e| primitive_error(e, "Csidh512::generate_secret_key"))
    }

    fn generate_public_key<R: CryptoRng + RngCore>(
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::PublicKey> {
        group_action(&Fp::ZERO, &secret_key.0, rng)
            .map(Csidh512PublicKey)
            .map_err(|e| primitive_error(e, "Csidh512::generate_public_key"))
    }

    fn validate_public_key<R: CryptoRng + RngCore>(
        public_key: &Self::PublicKey,
        rng: &mut R,
    ) -> ApiResult<bool> {
        validate_coefficient(&public_key.0, rng)
            .map_err(|e| primitive_error(e, "Csidh512::validate_public_key"))
    }

    fn derive_shared_secret<R: CryptoRng + RngCore>(
        public_key: &Self::PublicKey,
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SharedSecret> {
        let valid = Self::validate_public_key(public_key, rng)?;
        if !valid {
            log::debug!("{}: refusing to derive with an invalid peer key", Self::name());
        }
        validate::key(valid, "CSIDH-512 public", "curve is not a valid supersingular curve")?;

        let mut shared = group_action(&public_key.0, &secret_key.0, rng)
            .map_err(|e| primitive_error(e, "Csidh512::derive_shared_secret"))?;
        let mut bytes = shared.to_le_bytes();
        let secret = Csidh512SharedSecret(SecretBytes::new(bytes));
        bytes.zeroize();
        shared.zeroize();
        Ok(secret)
    }
}
