//! Classification boundary between the matcher layer and the type system.
//!
//! The matcher layer never defines what "numeric" or "integral" mean; those
//! semantics belong to the type system that produced the resolved type value.
//! This module defines the trait through which that oracle is consumed.

/// Classification oracle for resolved type values.
///
/// Implemented by the consumer's type representation. The matcher layer
/// forwards classification probes to these methods unchanged and compares
/// types with the `Eq` supertrait, which must be the type system's full
/// equality (including type parameters such as width or precision, not just
/// a coarse kind tag).
///
/// # Implementor Obligations
///
/// - Both methods must be total: return a definite boolean for every value,
///   never panic. A value the oracle cannot classify is "neither", not an
///   error.
/// - Both methods must be pure, cheap, and safe for concurrent read-only
///   invocation; matchers are probed from evaluation threads without locking.
/// - No relationship between the two classifications is assumed. In
///   particular, `is_integral` returning `true` does not imply `is_numeric`
///   does; whether integral types count as numeric is the oracle's call.
pub trait TypeClass: Eq {
    /// Whether this type is classified as numeric.
    fn is_numeric(&self) -> bool;

    /// Whether this type is classified as integral.
    fn is_integral(&self) -> bool;
}
