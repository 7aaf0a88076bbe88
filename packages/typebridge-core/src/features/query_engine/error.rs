//! Query engine errors

use super::domain::{Comparator, ValueKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    /// An ordering comparator was used with a value that has no ordering
    #[error("Unsupported type : {type_name} ({kind} values cannot be compared with `{comparator}`)")]
    UnsupportedComparisonType {
        comparator: Comparator,
        type_name: &'static str,
        kind: ValueKind,
    },

    #[error("Too many values for '{property}': {count} exceeds the disjunction limit of {limit}")]
    TooManyValues {
        property: String,
        count: usize,
        limit: usize,
    },

    #[error("Unknown comparator '{0}'. Valid comparators: eq (=), lt (<), gt (>), le (<=), ge (>=)")]
    UnknownComparator(String),

    #[error("NaN values are not allowed in expressions")]
    NaNNotAllowed,

    #[error("Invalid expression structure: {0}")]
    InvalidStructure(String),
}

impl QueryError {
    /// True for errors caused by the caller picking an unusable comparator
    pub fn is_unsupported_comparison(&self) -> bool {
        matches!(self, QueryError::UnsupportedComparisonType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = QueryError::UnsupportedComparisonType {
            comparator: Comparator::Lt,
            type_name: "Vec",
            kind: ValueKind::EqualityOnly,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported type : Vec (equality-only values cannot be compared with `<`)"
        );
        assert!(err.is_unsupported_comparison());
    }

    #[test]
    fn test_too_many_values_message() {
        let err = QueryError::TooManyValues {
            property: "category".into(),
            count: 3,
            limit: 2,
        };
        assert!(err.to_string().contains("3 exceeds the disjunction limit of 2"));
        assert!(!err.is_unsupported_comparison());
    }
}
