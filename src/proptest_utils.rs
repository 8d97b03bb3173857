//! Property-based testing utilities for typematch.
//!
//! This module provides proptest strategies for the fixture taxonomy and
//! matchers, plus the algebraic properties the predicate layer guarantees.
