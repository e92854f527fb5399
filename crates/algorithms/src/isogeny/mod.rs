//! Isogeny-based primitives
//!
//! Currently this contains CSIDH-512, the commutative supersingular isogeny
//! Diffie-Hellman group action over a 511-bit prime field.

pub mod csidh;
