//! x86_64 backend using BMI2 `mulx` and ADX carry chains
//!
//! Each multiply row is split into its low and high halves, which are then
//! folded into the accumulator along two independent carry chains.

#![allow(unsafe_code)]

use core::arch::x86_64::{_addcarryx_u64, _mulx_u64};

use super::FieldBackend;
use crate::isogeny::csidh::limb::{reduce_once, Limbs};
use isocrypt_params::pqc::csidh::{CSIDH_NUM_WORDS as N, CSIDH_P, CSIDH_P_NEG_INV};

cpufeatures::new!(cpuid_bmi2_adx, "bmi2", "adx");

/// Field backend for CPUs with BMI2 and ADX
///
/// Values of this type are only obtainable through [`Adx::detect`].
#[derive(Debug)]
pub struct Adx {
    _detected: (),
}

/// Only reachable through [`Adx::detect`] or a cached successful detection
pub(super) static ADX: Adx = Adx { _detected: () };

impl Adx {
    /// Returns the backend if the running CPU supports BMI2 and ADX.
    pub fn detect() -> Option<&'static Adx> {
        if cpuid_bmi2_adx::get() {
            Some(&ADX)
        } else {
            None
        }
    }
}

impl FieldBackend for Adx {
    fn name(&self) -> &'static str {
        "adx"
    }

    fn mul_rdc(&self, x: &Limbs, y: &Limbs) -> Limbs {
        // SAFETY: `Adx` is only handed out by `detect` on CPUs with BMI2 and ADX.
        let r = unsafe { mul_rdc_adx(x, y) };
        reduce_once(&r)
    }

    fn mul_small(&self, x: &Limbs, m: u64) -> Limbs {
        // SAFETY: as above.
        unsafe { mul_small_adx(x, m) }
    }
}

/// acc += a * b over a ten-word accumulator
#[target_feature(enable = "bmi2,adx")]
unsafe fn mul_add_word(acc: &mut [u64; N + 2], a: &Limbs, b: u64) {
    let mut lo = [0u64; N];
    let mut hi = [0u64; N];
    for j in 0..N {
        lo[j] = _mulx_u64(a[j], b, &mut hi[j]);
    }

    let mut c = 0u8;
    for j in 0..N {
        c = _addcarryx_u64(c, acc[j], lo[j], &mut acc[j]);
    }
    c = _addcarryx_u64(c, acc[N], 0, &mut acc[N]);
    acc[N + 1] = acc[N + 1].wrapping_add(c as u64);

    let mut o = 0u8;
    for j in 0..N {
        o = _addcarryx_u64(o, acc[j + 1], hi[j], &mut acc[j + 1]);
    }
    acc[N + 1] = acc[N + 1].wrapping_add(o as u64);
}

#[target_feature(enable = "bmi2,adx")]
unsafe fn mul_rdc_adx(x: &Limbs, y: &Limbs) -> Limbs {
    let mut t = [0u64; N + 2];
    for &yi in y.iter() {
        mul_add_word(&mut t, x, yi);
        let m = t[0].wrapping_mul(CSIDH_P_NEG_INV);
        mul_add_word(&mut t, &CSIDH_P, m);
        // t[0] is zero now
        t.copy_within(1.., 0);
        t[N + 1] = 0;
    }

    let mut r = [0u64; N];
    r.copy_from_slice(&t[..N]);
    r
}

#[target_feature(enable = "bmi2,adx")]
unsafe fn mul_small_adx(x: &Limbs, m: u64) -> Limbs {
    let mut r = [0u64; N];
    let mut hi = [0u64; N];
    for j in 0..N {
        r[j] = _mulx_u64(x[j], m, &mut hi[j]);
    }
    let mut c = 0u8;
    for j in 1..N {
        c = _addcarryx_u64(c, r[j], hi[j - 1], &mut r[j]);
    }
    r
}
