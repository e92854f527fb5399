//! Portable backend on `u128` arithmetic

use super::FieldBackend;
use crate::isogeny::csidh::limb::{adc, mac, reduce_once, Limbs};
use isocrypt_params::pqc::csidh::{CSIDH_NUM_WORDS as N, CSIDH_P, CSIDH_P_NEG_INV};

/// Field backend using only 64x64 -> 128-bit multiplication
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

/// x * m as a 576-bit integer
#[inline]
pub(crate) fn mul_wide(x: &Limbs, m: u64) -> [u64; N + 1] {
    let mut r = [0u64; N + 1];
    let mut carry = 0;
    for j in 0..N {
        (r[j], carry) = mac(0, x[j], m, carry);
    }
    r[N] = carry;
    r
}

impl FieldBackend for Portable {
    fn name(&self) -> &'static str {
        "portable"
    }

    // Coarsely integrated operand scanning: one multiply row, then one
    // reduction row that clears the low word and shifts down.
    fn mul_rdc(&self, x: &Limbs, y: &Limbs) -> Limbs {
        let mut t = [0u64; N + 2];
        for &yi in y.iter() {
            let mut carry = 0;
            for j in 0..N {
                (t[j], carry) = mac(t[j], x[j], yi, carry);
            }
            let (s, c) = adc(t[N], carry, 0);
            t[N] = s;
            t[N + 1] = c;

            let m = t[0].wrapping_mul(CSIDH_P_NEG_INV);
            let (_, mut carry) = mac(t[0], m, CSIDH_P[0], 0);
            for j in 1..N {
                (t[j - 1], carry) = mac(t[j], m, CSIDH_P[j], carry);
            }
            let (s, c) = adc(t[N], carry, 0);
            t[N - 1] = s;
            t[N] = t[N + 1] + c;
        }

        let mut r = [0u64; N];
        r.copy_from_slice(&t[..N]);
        reduce_once(&r)
    }

    fn mul_small(&self, x: &Limbs, m: u64) -> Limbs {
        let wide = mul_wide(x, m);
        let mut r = [0u64; N];
        r.copy_from_slice(&wide[..N]);
        r
    }
}
