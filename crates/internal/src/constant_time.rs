//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Expand a 0/1 selector into an all-zeros / all-ones 64-bit mask
#[inline(always)]
pub fn ct_mask64(bit: u8) -> u64 {
    0u64.wrapping_sub((bit & 1) as u64)
}

/// Pick `in1` when `mask` is all ones and `in2` when it is all zeros.
/// Any other mask gives an unspecified mix of the inputs.
#[inline(always)]
pub fn ct_pick64(mask: u64, in1: u64, in2: u64) -> u64 {
    (in1 & mask) | (in2 & !mask)
}

/// Returns 0 when `w == 0` and 1 otherwise, without branching.
///
/// When `w == 0`, `w - 1` sets the top bit and `w | !(w - 1)` clears it;
/// for every other value the top bit of the expression is set.
#[inline(always)]
pub fn ct_is_nonzero64(w: u64) -> u64 {
    (w | !w.wrapping_sub(1)) >> 63
}

/// Branch-free OR-fold of `a[i] ^ b[i]` over two word arrays, as a `Choice`
pub fn ct_words_eq<const W: usize>(a: &[u64; W], b: &[u64; W]) -> Choice {
    let mut acc = 0u64;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    Choice::from((ct_is_nonzero64(acc) ^ 1) as u8)
}
