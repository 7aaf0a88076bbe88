//! Property-based tests for the identifier registry
//!
//! Invariants that should hold for ALL value sets:
//! - Roundtrip: to_enum(to_id(e)) == e for injective projections
//! - Exclusion: identifiers_excluding(skip) == all_identifiers - ids(skip)
//! - Strictness: unknown ids always error, fail-safe never does

mod common;

use common::*;
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use typebridge_core::{Enumerated, IdentifierRegistry, RegistryError};

// ============================================================================
// QuickCheck Tests
// ============================================================================

#[quickcheck]
fn qc_roundtrip_over_distinct_values(values: Vec<u16>) -> TestResult {
    let mut distinct = values.clone();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() != values.len() || values.is_empty() {
        return TestResult::discard();
    }

    // Injective projection onto a different id type
    let registry = match IdentifierRegistry::new(&values, |v: &u16| format!("id-{v}")) {
        Ok(r) => r,
        Err(_) => return TestResult::failed(),
    };

    TestResult::from_bool(values.iter().all(|v| {
        let id = registry.id_of(v);
        registry.to_enum(Some(&id)) == Ok(Some(*v))
    }))
}

#[quickcheck]
fn qc_unknown_code_strict_vs_fail_safe(code: i32) -> TestResult {
    if (1..=4).contains(&code) {
        return TestResult::discard();
    }
    let strict = BY_CODE.to_enum(Some(&code));
    let lenient = BY_CODE.to_enum_fail_safe(Some(&code));
    TestResult::from_bool(
        matches!(strict, Err(RegistryError::UnknownIdentifier { .. }))
            && lenient == Some(Category::Opera),
    )
}

// ============================================================================
// Proptest Strategies
// ============================================================================

fn category_subset() -> impl Strategy<Value = Vec<Category>> {
    proptest::sample::subsequence(Category::values().to_vec(), 0..=4)
}

proptest! {
    #[test]
    fn prop_excluding_is_set_difference(skip in category_subset()) {
        let excluded = BY_CODE.identifiers_excluding(&skip);
        let skipped = BY_CODE.identifiers_of(&skip);
        let expected: Vec<i32> = BY_CODE
            .all_identifiers()
            .into_iter()
            .filter(|id| !skipped.contains(id))
            .collect();
        prop_assert_eq!(excluded, expected);
    }

    #[test]
    fn prop_colliding_projection_always_fails(values in proptest::collection::vec(0u8..50, 2..20)) {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assume!(sorted.len() >= 2);

        // Every value maps to the same id
        let result = IdentifierRegistry::new(&sorted, |_: &u8| 0u8);
        let is_duplicate = matches!(result, Err(RegistryError::DuplicateIdentifier { .. }));
        prop_assert!(is_duplicate);
    }

    #[test]
    fn prop_name_roundtrip(index in 0usize..4) {
        let category = Category::values()[index];
        let name = BY_NAME.id_of(&category);
        prop_assert_eq!(BY_NAME.to_enum(Some(name.as_str())), Ok(Some(category)));
    }
}
