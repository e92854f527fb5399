//! CSIDH-512 primitives
//!
//! CSIDH ("Commutative Supersingular Isogeny Diffie-Hellman") works over
//! the prime p = 4 * (3 * 5 * ... * 373 * 587) - 1, a 511-bit number. The
//! public keys are Montgomery coefficients A of supersingular curves
//! y^2 = x^3 + A*x^2 + x over GF(p), and a secret key is a vector of 74
//! small exponents, one per odd prime factor of (p + 1) / 4. Applying the
//! secret to a curve walks a chain of small-degree isogenies; because the
//! action is commutative, both parties end on the same curve.
//!
//! The layers, leaves first:
//! - [`Fp`]: field arithmetic in Montgomery form, with the multiplication
//!   backend picked at runtime (see [`backend`])
//! - [`Point`], [`Coeff`]: x-only Montgomery curve arithmetic and
//!   [`isogeny_vartime`]
//! - [`validate_coefficient`]: the supersingularity test for public keys
//! - [`group_action`]: the class-group action itself
//!
//! Routines named `*_vartime` leak their inputs through timing and must
//! only be given public data.

pub mod backend;
mod limb;

mod action;
mod curve;
mod exponents;
mod field;
mod sampler;
mod supersingular;
mod uint;

pub use action::group_action;
pub use curve::{isogeny_vartime, montgomery_eval, Coeff, Point};
pub use exponents::SecretExponents;
pub use field::Fp;
pub use limb::Limbs;
pub use sampler::FpSampler;
pub use supersingular::validate_coefficient;
pub use uint::U512;

pub use isocrypt_params::pqc::csidh::{
    CSIDH_FIELD_ELEMENT_SIZE, CSIDH_PRIMES, CSIDH_PRIME_COUNT, CSIDH_PRIVATE_KEY_SIZE,
    CSIDH_PUBLIC_KEY_SIZE, CSIDH_SHARED_SECRET_SIZE,
};
