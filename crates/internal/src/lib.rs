//! Internal utilities for the isocrypt library
//!
//! Nothing in this crate is part of the public API contract; it exists to
//! share constant-time and byte-order helpers between the member crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
