//! Testing utilities for the isocrypt library
//!
//! The integration and property tests live under `tests/`; this library
//! holds the shared timing harness they use.

pub mod suites;
