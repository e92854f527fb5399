//! Supersingularity test for public-key validation
//!
//! Batch cofactor multiplication from Castryck et al., "CSIDH: An Efficient
//! Post-Quantum Commutative Group Action", Algorithm 3. A random point is
//! pushed into the subgroup of order dividing (p + 1) / 4, and the small
//! primes are split recursively so that every [(p + 1) / l_i]P is reached
//! with about log2(74) ladder calls per level. Once the primes confirmed to
//! divide the point order multiply to more than 4 * sqrt(p), the curve must
//! be supersingular.
//!
//! Nothing here is constant time; it only ever sees public keys.

use rand::{CryptoRng, RngCore};

use super::curve::{Coeff, Point};
use super::field::Fp;
use super::sampler::FpSampler;
use super::uint::U512;
use crate::error::Result;
use isocrypt_params::pqc::csidh::{CSIDH_FOUR_SQRT_P, CSIDH_PRIMES, CSIDH_PRIME_COUNT};

/// Outcome of [`cofactor_mul`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Verdict {
    /// A decision was reached
    pub done: bool,
    /// When `done`: the curve is supersingular
    pub supersingular: bool,
}

impl Verdict {
    const UNDECIDED: Self = Self {
        done: false,
        supersingular: false,
    };

    fn or(self, other: Self) -> Self {
        Self {
            done: self.done || other.done,
            supersingular: self.supersingular || other.supersingular,
        }
    }
}

fn product_of_primes(range: core::ops::Range<usize>) -> U512 {
    CSIDH_PRIMES[range]
        .iter()
        .fold(U512::ONE, |acc, &l| acc.mul_small(l))
}

/// Recursive batch cofactor multiplication over primes `lo..hi`.
///
/// On entry `p` must be [prod of the primes outside lo..hi]P'. `order`
/// accumulates the primes found to divide the order of P'.
pub(crate) fn cofactor_mul(
    p: &mut Point,
    curve: &Coeff,
    lo: usize,
    hi: usize,
    order: &mut U512,
) -> Verdict {
    if hi - lo == 1 {
        if !bool::from(p.is_identity()) {
            let l = CSIDH_PRIMES[lo];
            *p = p.mul_vartime(&U512::from_u64(l), curve);
            if !bool::from(p.is_identity()) {
                // [l]P != O while l * rest kills it: order does not divide p + 1
                return Verdict {
                    done: true,
                    supersingular: false,
                };
            }
            *order = order.mul_small(l);
            if U512::from_words(CSIDH_FOUR_SQRT_P).is_less_vartime(order) {
                return Verdict {
                    done: true,
                    supersingular: true,
                };
            }
        }
        return Verdict::UNDECIDED;
    }

    let mid = lo + (hi - lo + 1) / 2;
    let left = product_of_primes(lo..mid);
    let right = product_of_primes(mid..hi);

    let mut q = p.mul_vartime(&left, curve);
    *p = p.mul_vartime(&right, curve);

    let upper = cofactor_mul(&mut q, curve, mid, hi, order);
    let lower = cofactor_mul(p, curve, lo, mid, order);
    upper.or(lower)
}

/// Whether `a` is the coefficient of a supersingular Montgomery curve
/// y^2 = x^3 + a*x^2 + x usable as a CSIDH-512 public key.
///
/// Rejects values not below p and the singular curves a = 2 and a = -2, then
/// samples points until the batch test decides. The loop only repeats with
/// negligible probability.
pub fn validate_coefficient<R: RngCore + CryptoRng>(a: &Fp, rng: &mut R) -> Result<bool> {
    if !a.is_canonical_vartime() {
        log::debug!("CSIDH public key rejected: coefficient not below p");
        return Ok(false);
    }
    if *a == Fp::TWO || *a == Fp::MINUS_TWO {
        log::debug!("CSIDH public key rejected: singular curve");
        return Ok(false);
    }

    let curve = Coeff::from_a(*a);
    let mut sampler = FpSampler::new();
    loop {
        let x = sampler.random_fp(rng)?;
        let mut p = Point::from_x(x).x_dbl(&curve).x_dbl(&curve);

        let mut order = U512::ONE;
        let verdict = cofactor_mul(&mut p, &curve, 0, CSIDH_PRIME_COUNT, &mut order);
        if verdict.done {
            if !verdict.supersingular {
                log::debug!("CSIDH public key rejected: curve is ordinary");
            }
            return Ok(verdict.supersingular);
        }
        log::trace!("CSIDH supersingularity test undecided, resampling");
    }
}
