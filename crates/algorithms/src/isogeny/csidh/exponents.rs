//! Secret exponent vectors
//!
//! A CSIDH-512 secret is one exponent in [-5, 5] per small prime. Exponents
//! are stored packed, two signed nibbles per byte: byte `i` holds exponent
//! `2i` in its low nibble and exponent `2i + 1` in its high nibble.

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::sampler::FpSampler;
use crate::error::{validate, Result};
use isocrypt_params::pqc::csidh::{
    CSIDH_EXPONENT_BOUND, CSIDH_PRIME_COUNT, CSIDH_PRIVATE_KEY_SIZE,
};

/// Packed vector of 74 exponents in [-5, 5]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretExponents {
    packed: [u8; CSIDH_PRIVATE_KEY_SIZE],
}

/// 1 if the nibble decodes to a value outside [-5, 5], i.e. 6..=10.
#[inline]
fn nibble_out_of_range(n: u8) -> u8 {
    (n.wrapping_sub(CSIDH_EXPONENT_BOUND as u8 + 1) < 5) as u8
}

impl SecretExponents {
    /// Sample exponents uniformly from [-5, 5].
    ///
    /// Random bytes are drawn 64 at a time; a byte is kept when it is in
    /// [-5, 5] as an `i8`, and its low nibble becomes the next exponent.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut sampler = FpSampler::new();
        let mut exponents = Self {
            packed: [0u8; CSIDH_PRIVATE_KEY_SIZE],
        };
        let mut filled = 0usize;
        while filled < CSIDH_PRIME_COUNT {
            let block = sampler.next_block(rng)?;
            for &b in block.iter() {
                let v = b as i8;
                if (-CSIDH_EXPONENT_BOUND..=CSIDH_EXPONENT_BOUND).contains(&v) {
                    exponents.packed[filled >> 1] |= (b & 0xF) << ((filled & 1) * 4);
                    filled += 1;
                    if filled == CSIDH_PRIME_COUNT {
                        break;
                    }
                }
            }
        }
        Ok(exponents)
    }

    /// Import the 37-byte packed encoding.
    ///
    /// Fails on a wrong length or on any nibble outside [-5, 5].
    pub fn from_packed(bytes: &[u8]) -> Result<Self> {
        validate::length("CSIDH-512 secret exponents", bytes.len(), CSIDH_PRIVATE_KEY_SIZE)?;

        let mut bad = 0u8;
        let mut packed = [0u8; CSIDH_PRIVATE_KEY_SIZE];
        for (dst, &b) in packed.iter_mut().zip(bytes.iter()) {
            bad |= nibble_out_of_range(b & 0xF) | nibble_out_of_range(b >> 4);
            *dst = b;
        }
        let checked =
            validate::parameter(bad == 0, "secret exponents", "exponent outside [-5, 5]");
        if let Err(e) = checked {
            packed.zeroize();
            return Err(e);
        }
        Ok(Self { packed })
    }

    /// The 37-byte packed encoding
    pub fn to_packed(&self) -> [u8; CSIDH_PRIVATE_KEY_SIZE] {
        self.packed
    }

    /// Exponent for prime `i`, in [-5, 5]
    #[inline]
    pub fn get(&self, i: usize) -> i8 {
        let b = self.packed[i >> 1];
        // bring the wanted nibble to the top, then sign-extend it down
        let shift = if i & 1 == 0 { 4 } else { 0 };
        ((b << shift) as i8) >> 4
    }
}

impl ConstantTimeEq for SecretExponents {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.packed[..].ct_eq(&other.packed[..])
    }
}

impl core::fmt::Debug for SecretExponents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecretExponents([REDACTED])")
    }
}
