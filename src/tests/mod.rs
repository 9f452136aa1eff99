//! Test modules for Kupu.
//!
//! This module contains the cross-cutting test suites:
//! - Property-based tests for the trie using proptest
//! - Table-driven scenarios using test-case
//! - Configuration loading and validation tests
//! - Error reporting tests
//! - Shared fixtures and strategies

pub mod test_utils;

pub use test_utils::TestFixture;
