//! Field multiplication backends
//!
//! Montgomery multiplication, the 512x64-bit small multiply and the
//! conditional swap are provided by a [`FieldBackend`]. Two exist: a
//! portable one built on `u128` arithmetic, and on x86_64 one built on the
//! BMI2 `mulx` and ADX `adcx`/`adox` instructions. The backend is chosen
//! once, the first time [`selected`] is called, and every [`Fp`](super::Fp)
//! operation goes through that choice.

use super::limb::Limbs;

pub(crate) mod portable;
pub use portable::Portable;

#[cfg(target_arch = "x86_64")]
mod adx;
#[cfg(target_arch = "x86_64")]
pub use adx::Adx;

/// Arithmetic primitives that differ between backends.
///
/// All inputs are reduced (< p) Montgomery-domain words unless stated
/// otherwise, and every method runs in constant time.
pub trait FieldBackend: Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Montgomery product x * y / 2^512 mod p, fully reduced
    fn mul_rdc(&self, x: &Limbs, y: &Limbs) -> Limbs;

    /// x * m mod 2^512 on plain integers
    fn mul_small(&self, x: &Limbs, m: u64) -> Limbs;

    /// Swap `x` and `y` when `choice == 1`, leave them when `choice == 0`.
    ///
    /// Any other value of `choice` gives an unspecified result.
    #[inline]
    fn cswap(&self, x: &mut Limbs, y: &mut Limbs, choice: u8) {
        let mask = 0u64.wrapping_sub(choice as u64);
        for (a, b) in x.iter_mut().zip(y.iter_mut()) {
            let t = mask & (*a ^ *b);
            *a ^= t;
            *b ^= t;
        }
    }
}

/// The portable backend, available everywhere
pub static PORTABLE: Portable = Portable;

fn detect() -> &'static dyn FieldBackend {
    #[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
    {
        if let Some(adx) = Adx::detect() {
            return adx;
        }
    }
    &PORTABLE
}

/// The backend used by [`Fp`](super::Fp) arithmetic.
#[cfg(feature = "std")]
pub fn selected() -> &'static dyn FieldBackend {
    static SELECTED: std::sync::OnceLock<&'static dyn FieldBackend> = std::sync::OnceLock::new();
    *SELECTED.get_or_init(|| {
        let backend = detect();
        log::debug!("CSIDH field backend: {}", backend.name());
        backend
    })
}

/// The backend used by [`Fp`](super::Fp) arithmetic.
///
/// The choice is kept in an atomic tag. Concurrent first calls may both
/// probe the CPU, but they store the same tag.
#[cfg(not(feature = "std"))]
pub fn selected() -> &'static dyn FieldBackend {
    use core::sync::atomic::{AtomicU8, Ordering};

    const UNRESOLVED: u8 = 0;
    const TAG_PORTABLE: u8 = 1;
    #[cfg(target_arch = "x86_64")]
    const TAG_ADX: u8 = 2;

    static SELECTED: AtomicU8 = AtomicU8::new(UNRESOLVED);

    match SELECTED.load(Ordering::Relaxed) {
        TAG_PORTABLE => &PORTABLE,
        #[cfg(target_arch = "x86_64")]
        TAG_ADX => &adx::ADX,
        _ => {
            let backend = detect();
            log::debug!("CSIDH field backend: {}", backend.name());
            let tag = match backend.name() {
                #[cfg(target_arch = "x86_64")]
                "adx" => TAG_ADX,
                _ => TAG_PORTABLE,
            };
            SELECTED.store(tag, Ordering::Relaxed);
            backend
        }
    }
}
