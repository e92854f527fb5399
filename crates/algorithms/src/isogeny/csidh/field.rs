//! CSIDH-512 base field GF(p)
//!
//! Elements are kept fully reduced and in Montgomery form (v * 2^512 mod p).
//! Every arithmetic method here is constant time; the few comparisons that
//! are not carry a `_vartime` suffix.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::backend;
use super::limb::{add_with_carry, reduce_once, sub_with_borrow, Limbs};
use super::uint::U512;
use isocrypt_internal::constant_time::{ct_mask64, ct_words_eq};
use isocrypt_internal::endian::{words_from_le_bytes, words_to_le_bytes};
use isocrypt_params::pqc::csidh::{
    CSIDH_FIELD_ELEMENT_SIZE, CSIDH_LIMB_BITS, CSIDH_MONT_FOUR, CSIDH_MONT_MINUS_TWO,
    CSIDH_MONT_ONE, CSIDH_MONT_R2, CSIDH_MONT_TWO, CSIDH_NUM_WORDS, CSIDH_P, CSIDH_P_MINUS_1_HALF,
    CSIDH_P_MINUS_2,
};

/// Exponentiation window width in bits
const WINDOW_BITS: usize = 4;

/// Field element in Montgomery form.
///
/// Values may be secret (the shared coefficient, ladder intermediates), so
/// `Debug` does not print them. Use [`Fp::to_le_bytes`] for public values.
#[derive(Clone, Copy, Default, Zeroize)]
pub struct Fp(pub(crate) Limbs);

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp([REDACTED])")
    }
}

impl Fp {
    /// The additive identity
    pub const ZERO: Self = Self([0; CSIDH_NUM_WORDS]);

    /// The multiplicative identity
    pub const ONE: Self = Self(CSIDH_MONT_ONE);

    /// 2
    pub const TWO: Self = Self(CSIDH_MONT_TWO);

    /// -2
    pub const MINUS_TWO: Self = Self(CSIDH_MONT_MINUS_TWO);

    /// 4
    pub const FOUR: Self = Self(CSIDH_MONT_FOUR);

    /// Wrap Montgomery-form words without any check.
    ///
    /// Callers must make sure the value is below p before doing arithmetic,
    /// see [`Fp::is_canonical_vartime`].
    pub const fn from_montgomery_words(words: Limbs) -> Self {
        Self(words)
    }

    /// The raw Montgomery-form words
    pub const fn as_montgomery_words(&self) -> &Limbs {
        &self.0
    }

    /// Decode 64 little-endian bytes holding a Montgomery-form value.
    ///
    /// No range check is made.
    pub fn from_le_bytes(bytes: &[u8; CSIDH_FIELD_ELEMENT_SIZE]) -> Self {
        Self(words_from_le_bytes(bytes))
    }

    /// Encode the Montgomery-form value as 64 little-endian bytes
    pub fn to_le_bytes(&self) -> [u8; CSIDH_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; CSIDH_FIELD_ELEMENT_SIZE];
        words_to_le_bytes(&self.0, &mut out);
        out
    }

    /// Convert a plain integer below p into Montgomery form
    pub fn from_plain(plain: &U512) -> Self {
        Fp::mul(&Self(plain.0), &Self(CSIDH_MONT_R2))
    }

    /// Convert out of Montgomery form to a plain integer in [0, p)
    pub fn to_plain(&self) -> U512 {
        U512(self.mul(&Self(U512::ONE.0)).0)
    }

    /// Plain small integer in Montgomery form
    pub fn from_u64(v: u64) -> Self {
        Self::from_plain(&U512::from_u64(v))
    }

    /// Whether the stored words are below p.
    ///
    /// Variable time: use on public values only.
    pub fn is_canonical_vartime(&self) -> bool {
        U512(self.0).is_less_vartime(&U512(CSIDH_P))
    }

    /// self + rhs mod p
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        // both inputs are below p < 2^511, so the sum cannot carry out
        let (sum, _) = add_with_carry(&self.0, &rhs.0);
        Self(reduce_once(&sum))
    }

    /// self - rhs mod p
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = sub_with_borrow(&self.0, &rhs.0);
        let mask = ct_mask64(borrow as u8);
        let mut fix = [0u64; CSIDH_NUM_WORDS];
        for (f, p) in fix.iter_mut().zip(CSIDH_P.iter()) {
            *f = p & mask;
        }
        let (r, _) = add_with_carry(&diff, &fix);
        Self(r)
    }

    /// self * rhs mod p (Montgomery product)
    #[inline]
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(backend::selected().mul_rdc(&self.0, &rhs.0))
    }

    /// self^2 mod p
    #[inline]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// self + self mod p
    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Fixed 4-bit window exponentiation over the low `bits` bits of `exp`.
    ///
    /// The table lookup scans all sixteen entries, so neither the base nor
    /// the exponent influences the memory access pattern.
    fn pow_windowed(&self, exp: &[u64], bits: usize) -> Self {
        let mut table = [Self::ONE; 1 << WINDOW_BITS];
        table[1] = *self;
        for i in (2..table.len()).step_by(2) {
            table[i] = table[i / 2].square();
            table[i + 1] = table[i].mul(self);
        }

        let per_word = CSIDH_LIMB_BITS / WINDOW_BITS;
        let mut r = Self::ONE;
        for i in (0..bits / WINDOW_BITS).rev() {
            for _ in 0..WINDOW_BITS {
                r = r.square();
            }
            let idx = (exp[i / per_word] >> ((i % per_word) * WINDOW_BITS)) & 0xF;
            let mut t = Self::ONE;
            for (k, entry) in table.iter().enumerate() {
                t.conditional_assign(entry, (k as u64).ct_eq(&idx));
            }
            r = r.mul(&t);
        }
        table.zeroize();
        r
    }

    /// self^exp for a 512-bit exponent
    pub fn pow(&self, exp: &U512) -> Self {
        self.pow_windowed(&exp.0, CSIDH_NUM_WORDS * CSIDH_LIMB_BITS)
    }

    /// self^exp for a 64-bit exponent
    pub fn pow_u64(&self, exp: u64) -> Self {
        self.pow_windowed(&[exp], CSIDH_LIMB_BITS)
    }

    /// Multiplicative inverse by Fermat's little theorem; maps 0 to 0.
    pub fn invert(&self) -> Self {
        self.pow(&U512(CSIDH_P_MINUS_2))
    }

    /// Euler's criterion: 1 unless self^((p-1)/2) == 1.
    ///
    /// Zero is reported as a non-residue.
    pub fn is_non_quadratic_residue(&self) -> Choice {
        let r = self.pow(&U512(CSIDH_P_MINUS_1_HALF));
        !r.ct_eq(&Self::ONE)
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        ct_words_eq(&self.0, &Self::ZERO.0)
    }

    /// Swap `a` and `b` when `choice == 1`.
    #[inline]
    pub fn conditional_swap(a: &mut Self, b: &mut Self, choice: u8) {
        backend::selected().cswap(&mut a.0, &mut b.0, choice);
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_words_eq(&self.0, &other.0)
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp {}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; CSIDH_NUM_WORDS];
        for i in 0..CSIDH_NUM_WORDS {
            out[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self(out)
    }
}

impl<'b> Add<&'b Fp> for &Fp {
    type Output = Fp;

    fn add(self, rhs: &'b Fp) -> Fp {
        Fp::add(self, rhs)
    }
}

impl AddAssign for Fp {
    fn add_assign(&mut self, rhs: Fp) {
        *self = Fp::add(self, &rhs);
    }
}

impl<'b> Sub<&'b Fp> for &Fp {
    type Output = Fp;

    fn sub(self, rhs: &'b Fp) -> Fp {
        Fp::sub(self, rhs)
    }
}

impl SubAssign for Fp {
    fn sub_assign(&mut self, rhs: Fp) {
        *self = Fp::sub(self, &rhs);
    }
}

impl<'b> Mul<&'b Fp> for &Fp {
    type Output = Fp;

    fn mul(self, rhs: &'b Fp) -> Fp {
        Fp::mul(self, rhs)
    }
}

impl MulAssign for Fp {
    fn mul_assign(&mut self, rhs: Fp) {
        *self = Fp::mul(self, &rhs);
    }
}
