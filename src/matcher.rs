//! Type predicate matchers for rewrite-rule patterns.

use serde::{Deserialize, Serialize};

use crate::classify::TypeClass;

/// A predicate over a resolved type value, embedded in a rule pattern.
///
/// Each typed slot in a rewrite-rule pattern holds one matcher. When the rule
/// engine probes a plan node, it extracts the node's resolved type and calls
/// [`TypeMatcher::matches`]; a `false` result aborts the rule's match attempt
/// for that node.
///
/// The four strategies form a closed family dispatched by an exhaustive
/// `match`, so adding a strategy is a compile-checked change at a single
/// site. Matchers are immutable after construction: `TypeMatcher<T>` is
/// `Send + Sync` whenever `T` is, and one instance may be probed from
/// multiple evaluation threads without locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeMatcher<T> {
    /// Matches exactly one type under the type system's full equality,
    /// including type parameters such as width or precision.
    Specific(T),
    /// Matches any type equal to at least one element of a finite whitelist.
    ///
    /// Duplicates are harmless and order is irrelevant. An empty whitelist
    /// never matches. Membership is a linear scan; whitelists are expected
    /// to stay small.
    AnyOf(Vec<T>),
    /// Matches any type the classification oracle reports as numeric.
    Numeric,
    /// Matches any type the classification oracle reports as integral.
    ///
    /// Forwarded independently of [`TypeMatcher::Numeric`]; no subset
    /// relationship between the two classifications is assumed.
    Integral,
}

impl<T> TypeMatcher<T> {
    /// Matcher accepting exactly `ty`.
    pub fn specific(ty: T) -> Self {
        Self::Specific(ty)
    }

    /// Matcher accepting any type in `types`.
    pub fn any_of<I>(types: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::AnyOf(types.into_iter().collect())
    }

    /// Matcher accepting any numeric type.
    pub const fn numeric() -> Self {
        Self::Numeric
    }

    /// Matcher accepting any integral type.
    pub const fn integral() -> Self {
        Self::Integral
    }
}

impl<T: TypeClass> TypeMatcher<T> {
    /// Check whether `ty` satisfies this matcher.
    ///
    /// Total and pure: never panics, never allocates, and returns the same
    /// boolean for the same type value over the life of the matcher. Cost is
    /// O(1), or O(n) in the whitelist length for [`TypeMatcher::AnyOf`].
    pub fn matches(&self, ty: &T) -> bool {
        match self {
            Self::Specific(target) => ty == target,
            Self::AnyOf(types) => types.iter().any(|t| t == ty),
            Self::Numeric => ty.is_numeric(),
            Self::Integral => ty.is_integral(),
        }
    }
}

impl<T> From<T> for TypeMatcher<T> {
    fn from(ty: T) -> Self {
        Self::Specific(ty)
    }
}

impl<T> From<Vec<T>> for TypeMatcher<T> {
    fn from(types: Vec<T>) -> Self {
        Self::AnyOf(types)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for TypeMatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Specific(ty) => write!(f, "Specific({ty})"),
            Self::AnyOf(types) => {
                write!(f, "AnyOf(")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{ty}")?;
                }
                write!(f, ")")
            }
            Self::Numeric => write!(f, "Numeric"),
            Self::Integral => write!(f, "Integral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ColumnType;

    #[test]
    fn test_specific_requires_exact_type() {
        let matcher = TypeMatcher::specific(ColumnType::Int32);
        assert!(matcher.matches(&ColumnType::Int32));
        assert!(!matcher.matches(&ColumnType::Int64));
    }

    #[test]
    fn test_specific_compares_type_parameters() {
        let matcher = TypeMatcher::specific(ColumnType::decimal(10, 2));
        assert!(matcher.matches(&ColumnType::decimal(10, 2)));
        assert!(!matcher.matches(&ColumnType::decimal(12, 2)));
        assert!(!matcher.matches(&ColumnType::decimal(10, 0)));
    }

    #[test]
    fn test_any_of_membership() {
        let matcher = TypeMatcher::any_of([ColumnType::Int32, ColumnType::Varchar]);
        assert!(matcher.matches(&ColumnType::Int32));
        assert!(matcher.matches(&ColumnType::Varchar));
        assert!(!matcher.matches(&ColumnType::decimal(10, 2)));
    }

    #[test]
    fn test_any_of_empty_never_matches() {
        let matcher = TypeMatcher::any_of(Vec::new());
        assert!(!matcher.matches(&ColumnType::Int32));
        assert!(!matcher.matches(&ColumnType::Varchar));
    }

    #[test]
    fn test_any_of_tolerates_duplicates() {
        let matcher = TypeMatcher::any_of([
            ColumnType::Date,
            ColumnType::Timestamp,
            ColumnType::Date,
        ]);
        assert!(matcher.matches(&ColumnType::Date));
        assert!(!matcher.matches(&ColumnType::Varchar));
    }

    #[test]
    fn test_numeric_delegates_to_oracle() {
        let matcher = TypeMatcher::numeric();
        assert!(matcher.matches(&ColumnType::decimal(10, 2)));
        assert!(matcher.matches(&ColumnType::Int64));
        assert!(matcher.matches(&ColumnType::Float64));
        assert!(!matcher.matches(&ColumnType::Varchar));
        assert!(!matcher.matches(&ColumnType::Boolean));
    }

    #[test]
    fn test_integral_delegates_to_oracle() {
        let matcher = TypeMatcher::integral();
        assert!(matcher.matches(&ColumnType::Int16));
        assert!(matcher.matches(&ColumnType::Int64));
        assert!(!matcher.matches(&ColumnType::decimal(10, 2)));
        assert!(!matcher.matches(&ColumnType::Float64));
    }

    #[test]
    fn test_from_conversions() {
        let specific: TypeMatcher<ColumnType> = ColumnType::Int32.into();
        assert_eq!(specific, TypeMatcher::Specific(ColumnType::Int32));

        let whitelist: TypeMatcher<ColumnType> =
            vec![ColumnType::Date, ColumnType::Timestamp].into();
        assert_eq!(
            whitelist,
            TypeMatcher::AnyOf(vec![ColumnType::Date, ColumnType::Timestamp])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TypeMatcher::specific(ColumnType::Int32).to_string(),
            "Specific(Int32)"
        );
        assert_eq!(
            TypeMatcher::any_of([ColumnType::Int32, ColumnType::Varchar]).to_string(),
            "AnyOf(Int32 | Varchar)"
        );
        assert_eq!(TypeMatcher::<ColumnType>::numeric().to_string(), "Numeric");
        assert_eq!(
            TypeMatcher::<ColumnType>::integral().to_string(),
            "Integral"
        );
    }
}
