//! Word-level helpers shared by the field backends

use isocrypt_internal::constant_time::{ct_mask64, ct_pick64};
use isocrypt_params::pqc::csidh::{CSIDH_NUM_WORDS, CSIDH_P};

/// Eight little-endian 64-bit words
pub type Limbs = [u64; CSIDH_NUM_WORDS];

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// The incoming borrow is read from its top bit; the outgoing borrow is
/// either 0 or `u64::MAX`.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// x + y over 512 bits, returning the sum and the carry out (0 or 1)
#[inline]
pub(crate) fn add_with_carry(x: &Limbs, y: &Limbs) -> (Limbs, u64) {
    let mut r = [0u64; CSIDH_NUM_WORDS];
    let mut carry = 0;
    for i in 0..CSIDH_NUM_WORDS {
        (r[i], carry) = adc(x[i], y[i], carry);
    }
    (r, carry)
}

/// x - y over 512 bits, returning the difference and the borrow out (0 or 1)
#[inline]
pub(crate) fn sub_with_borrow(x: &Limbs, y: &Limbs) -> (Limbs, u64) {
    let mut r = [0u64; CSIDH_NUM_WORDS];
    let mut borrow = 0;
    for i in 0..CSIDH_NUM_WORDS {
        (r[i], borrow) = sbb(x[i], y[i], borrow);
    }
    (r, borrow >> 63)
}

/// Map a value in [0, 2p) to [0, p) in constant time.
#[inline]
pub(crate) fn reduce_once(r: &Limbs) -> Limbs {
    let (t, borrow) = sub_with_borrow(r, &CSIDH_P);
    // borrow set: r < p, keep r
    let mask = ct_mask64(borrow as u8);
    let mut out = [0u64; CSIDH_NUM_WORDS];
    for i in 0..CSIDH_NUM_WORDS {
        out[i] = ct_pick64(mask, r[i], t[i]);
    }
    out
}
