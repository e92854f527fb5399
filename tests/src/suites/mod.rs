//! Reusable test suites
