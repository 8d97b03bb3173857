//! Type-classification predicates for rule-based query plan rewriting.
//!
//! `typematch` supplies the leaf-level matchers a rule-based optimizer uses
//! to test whether the *type* of a matched plan node satisfies a pattern
//! condition, as opposed to the structural matchers that test operator shape
//! or child count. A rewrite rule like "fold this expression only when both
//! operands are numeric" holds one [`TypeMatcher`] per typed slot in its
//! pattern; a `false` probe aborts the rule's match attempt for that node.
//!
//! # Overview
//!
//! - [`TypeMatcher`]: the predicate family — an exact type, a whitelist of
//!   acceptable types, any numeric type, or any integral type
//! - [`TypeClass`]: the boundary trait through which the consumer's type
//!   system supplies equality and numeric/integral classification
//! - [`testing`]: a concrete column-type taxonomy for tests and examples
//!
//! # Key Design Principles
//!
//! 1. **Total predicates**: every probe returns a boolean; nothing here can
//!    fail or panic, so the rule engine can probe in tight matching loops
//!    without error handling
//! 2. **Oracle delegation**: what counts as numeric or integral lives
//!    entirely in the consumer's [`TypeClass`] implementation; this layer
//!    never reimplements or overrides classification
//! 3. **Immutable matchers**: a matcher owns its configuration for life and
//!    may be probed concurrently (`Send + Sync` whenever the type value is)
//!
//! # Example
//!
//! ```rust
//! use typematch::TypeMatcher;
//! use typematch::testing::ColumnType;
//!
//! // "operand must be exactly a 32-bit integer"
//! let exact = TypeMatcher::specific(ColumnType::Int32);
//! assert!(exact.matches(&ColumnType::Int32));
//! assert!(!exact.matches(&ColumnType::Int64));
//!
//! // "operand may be a timestamp or a date"
//! let temporal = TypeMatcher::any_of([ColumnType::Timestamp, ColumnType::Date]);
//! assert!(temporal.matches(&ColumnType::Date));
//!
//! // "fold only numeric operands"
//! let numeric = TypeMatcher::numeric();
//! assert!(numeric.matches(&ColumnType::decimal(10, 2)));
//! assert!(!numeric.matches(&ColumnType::Varchar));
//! ```

#![forbid(unsafe_code)]

pub mod classify;
pub mod matcher;
mod proptest_utils;
pub mod testing;

// Re-export the public surface at the crate root
pub use classify::TypeClass;
pub use matcher::TypeMatcher;
