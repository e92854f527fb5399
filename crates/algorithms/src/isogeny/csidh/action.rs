//! The CSIDH class-group action
//!
//! Algorithm 2 of Castryck et al.: points are sampled at random, and the
//! sign of x^3 + A*x^2 + x decides whether the point lies on the curve or its
//! twist, which in turn decides whether it can serve primes with positive or
//! negative exponents. Each useful point is cleared of the cofactor and then
//! used for as many isogeny steps as its order allows.
//!
//! Which points get used depends on the secret, so the loop structure is
//! not independent of it; the field arithmetic underneath is.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::curve::{isogeny_vartime, montgomery_eval, Coeff, Point};
use super::exponents::SecretExponents;
use super::field::Fp;
use super::sampler::FpSampler;
use super::uint::U512;
use crate::error::Result;
use isocrypt_params::pqc::csidh::{CSIDH_PRIMES, CSIDH_PRIME_COUNT};

/// Apply the action of `exponents` to the curve y^2 = x^3 + a*x^2 + x and
/// return the coefficient of the resulting curve.
///
/// The number of iterations is random; with 74 primes and exponents bounded
/// by 5 the loop terminates with overwhelming probability and has no cap.
/// A failing randomness source aborts the computation.
pub fn group_action<R: RngCore + CryptoRng>(
    a: &Fp,
    exponents: &SecretExponents,
    rng: &mut R,
) -> Result<Fp> {
    // remaining[s][i]: steps still owed for prime i on side s
    // (side 0: positive exponents, side 1: negative exponents)
    let mut remaining = Zeroizing::new([[0u8; CSIDH_PRIME_COUNT]; 2]);
    let mut cofactor = Zeroizing::new([U512::from_u64(4); 2]);
    let mut done = [false; 2];

    for (i, &l) in CSIDH_PRIMES.iter().enumerate() {
        let e = exponents.get(i);
        if e > 0 {
            remaining[0][i] = e as u8;
            cofactor[1] = cofactor[1].mul_small(l);
        } else if e < 0 {
            remaining[1][i] = e.unsigned_abs();
            cofactor[0] = cofactor[0].mul_small(l);
        } else {
            cofactor[0] = cofactor[0].mul_small(l);
            cofactor[1] = cofactor[1].mul_small(l);
        }
    }

    let mut curve = Zeroizing::new(Coeff::from_a(*a));
    let mut sampler = FpSampler::new();
    loop {
        let x = sampler.random_fp(rng)?;
        let rhs = montgomery_eval(&curve.a, &x);
        let side = rhs.is_non_quadratic_residue().unwrap_u8() as usize;
        if done[side] {
            continue;
        }

        let mut p = Point::from_x(x).mul_vartime(&cofactor[side], &curve);
        done[side] = true;

        for (i, &l) in CSIDH_PRIMES.iter().enumerate() {
            if remaining[side][i] != 0 {
                let cof = CSIDH_PRIMES
                    .iter()
                    .enumerate()
                    .skip(i + 1)
                    .filter(|&(j, _)| remaining[side][j] != 0)
                    .fold(U512::ONE, |acc, (_, &lj)| acc.mul_small(lj));

                let kernel = p.mul_vartime(&cof, &curve);
                if !bool::from(kernel.is_identity()) {
                    isogeny_vartime(&mut p, &mut curve, &kernel, l);
                    remaining[side][i] -= 1;
                    if remaining[side][i] == 0 {
                        cofactor[side] = cofactor[side].mul_small(l);
                    }
                }
            }
            done[side] &= remaining[side][i] == 0;
        }

        curve.normalize();

        if done[0] && done[1] {
            return Ok(curve.a);
        }
    }
}
