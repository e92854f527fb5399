//! Plain 512-bit integers
//!
//! Scalars for the Montgomery ladder, cofactor products and the running
//! order in the supersingularity test are ordinary integers, not field
//! elements. Keeping them in their own type stops them from being mixed
//! up with Montgomery-domain values.

use core::cmp::Ordering;

use zeroize::Zeroize;

use super::backend;
use super::limb::{sub_with_borrow, Limbs};
use isocrypt_params::pqc::csidh::{CSIDH_LIMB_BITS, CSIDH_NUM_WORDS};

/// Unsigned 512-bit integer, eight little-endian words
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct U512(pub(crate) Limbs);

impl U512 {
    /// Zero
    pub const ZERO: Self = Self([0; CSIDH_NUM_WORDS]);

    /// One
    pub const ONE: Self = Self::from_u64(1);

    /// Build from a single word
    pub const fn from_u64(v: u64) -> Self {
        let mut w = [0u64; CSIDH_NUM_WORDS];
        w[0] = v;
        Self(w)
    }

    /// Build from little-endian words
    pub const fn from_words(words: Limbs) -> Self {
        Self(words)
    }

    /// Little-endian words
    pub const fn words(&self) -> &Limbs {
        &self.0
    }

    /// self * m mod 2^512
    pub fn mul_small(&self, m: u64) -> Self {
        Self(backend::selected().mul_small(&self.0, m))
    }

    /// self * m as a 576-bit integer, nine little-endian words
    pub fn mul_small_wide(&self, m: u64) -> [u64; CSIDH_NUM_WORDS + 1] {
        backend::portable::mul_wide(&self.0, m)
    }

    /// self - rhs mod 2^512 together with the borrow out (0 or 1)
    pub fn sub_with_borrow(&self, rhs: &Self) -> (Self, u64) {
        let (r, borrow) = sub_with_borrow(&self.0, &rhs.0);
        (Self(r), borrow)
    }

    /// Bit `i` of the integer (0 or 1)
    #[inline]
    pub fn bit(&self, i: usize) -> u8 {
        ((self.0[i / CSIDH_LIMB_BITS] >> (i % CSIDH_LIMB_BITS)) & 1) as u8
    }

    /// Index of the highest set bit, or 0 when the value is 0 or 1.
    ///
    /// Variable time: use on public integers only.
    pub fn highest_bit_vartime(&self) -> usize {
        let mut j = CSIDH_NUM_WORDS * CSIDH_LIMB_BITS - 1;
        while j > 0 && self.bit(j) == 0 {
            j -= 1;
        }
        j
    }

    /// `self < rhs`, scanning from the top word and stopping early.
    ///
    /// Variable time: use on public integers only.
    pub fn is_less_vartime(&self, rhs: &Self) -> bool {
        self.cmp_vartime(rhs) == Ordering::Less
    }

    fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        for (x, y) in self.0.iter().rev().zip(rhs.0.iter().rev()) {
            match x.cmp(y) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}
