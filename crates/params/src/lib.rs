//! Constant values for the isocrypt library
//!
//! Parameters are plain data with no behaviour attached; arithmetic types
//! that interpret them live in `isocrypt-algorithms`.

#![no_std]
#![deny(missing_docs)]

pub mod pqc;
