//! Uniform sampling of field elements

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::field::Fp;
use super::uint::U512;
use crate::error::{Error, Result};
use isocrypt_internal::endian::words_from_le_bytes;
use isocrypt_params::pqc::csidh::{
    CSIDH_FIELD_ELEMENT_SIZE, CSIDH_LIMB_BITS, CSIDH_NUM_WORDS, CSIDH_P, CSIDH_P_BITS,
};

/// Mask keeping the low 511 bits of the top word
const TOP_WORD_MASK: u64 = (1u64 << (CSIDH_P_BITS % CSIDH_LIMB_BITS)) - 1;

/// Scratch buffer for random draws.
///
/// Every operation that needs randomness creates its own sampler, so two
/// concurrent operations never share the buffer. It is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct FpSampler {
    buf: [u8; CSIDH_FIELD_ELEMENT_SIZE],
}

impl Default for FpSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl FpSampler {
    /// An empty sampler
    pub fn new() -> Self {
        Self {
            buf: [0u8; CSIDH_FIELD_ELEMENT_SIZE],
        }
    }

    /// Refill the buffer with 64 fresh bytes and return it.
    ///
    /// A failing source is reported and not retried.
    pub fn next_block<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[u8; CSIDH_FIELD_ELEMENT_SIZE]> {
        rng.try_fill_bytes(&mut self.buf)
            .map_err(|_| Error::Randomness {
                context: "CSIDH sampler",
            })?;
        Ok(&self.buf)
    }

    /// Draw a uniformly random element of [0, p).
    ///
    /// 64 bytes are read as eight little-endian words, the top word is cut
    /// to 511 bits, and the draw is repeated while the value is not below p.
    /// The words are used directly as a Montgomery-form value.
    pub fn random_fp<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<Fp> {
        let p = U512::from_words(CSIDH_P);
        loop {
            let block = self.next_block(rng)?;
            let mut words: [u64; CSIDH_NUM_WORDS] = words_from_le_bytes(block);
            words[CSIDH_NUM_WORDS - 1] &= TOP_WORD_MASK;
            let candidate = U512::from_words(words);
            words.zeroize();
            if candidate.is_less_vartime(&p) {
                return Ok(Fp::from_montgomery_words(*candidate.words()));
            }
        }
    }
}
