//! Identifier registry integration tests

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use typebridge_core::{Choice, Enumerated, IdentifierRegistry, RegistryError, TypebridgeError};

#[test]
fn test_code_registry_scenario() {
    assert_eq!(BY_CODE.to_id(Some(&Category::Oratorio)), Some(2));
    assert_eq!(BY_CODE.to_enum(Some(&2)).unwrap(), Some(Category::Oratorio));
    assert_eq!(BY_CODE.to_id(None), None);
    assert_eq!(BY_CODE.to_enum::<i32>(None).unwrap(), None);

    let err = BY_CODE.to_enum(Some(&99)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown Category value : 99, supported values are : [Opera, Oratorio, Symphonic, Chamber]"
    );
}

#[test]
fn test_fail_safe_returns_fallback() {
    assert_eq!(BY_CODE.to_enum_fail_safe(Some(&99)), Some(Category::Opera));
    assert_eq!(BY_CODE.to_enum_fail_safe(Some(&4)), Some(Category::Chamber));
    assert_eq!(BY_CODE.to_enum_fail_safe::<i32>(None), None);
}

#[test]
fn test_name_registry_accepts_str() {
    assert_eq!(BY_NAME.id_of(&Category::Symphonic), "SYMPHONIC");
    assert_eq!(BY_NAME.to_enum(Some("CHAMBER")).unwrap(), Some(Category::Chamber));
    assert!(BY_NAME.contains_id("OPERA"));
    assert!(!BY_NAME.contains_id("opera"));
    assert_eq!(BY_NAME.fail_value(), None);
    assert_eq!(BY_NAME.to_enum_fail_safe(Some("BALLET")), None);
}

#[test]
fn test_duplicate_identifier_names_both_values() {
    let err = IdentifierRegistry::new(Category::values(), |c: &Category| c.code() % 2).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateIdentifier {
            id: "1".into(),
            first: "Opera".into(),
            second: "Symphonic".into(),
        }
    );

    let wrapped: TypebridgeError = err.into();
    assert!(!wrapped.is_recoverable());
}

#[test]
fn test_unknown_identifier_is_recoverable() {
    let wrapped: TypebridgeError = BY_CODE.value_of(&0).unwrap_err().into();
    assert!(wrapped.is_recoverable());
}

#[test]
fn test_listings_keep_registry_order() {
    assert_eq!(BY_CODE.all_identifiers(), vec![1, 2, 3, 4]);
    assert_eq!(
        BY_CODE.identifiers_of(&[Category::Chamber, Category::Opera]),
        vec![4, 1]
    );
    assert_eq!(
        BY_CODE.identifiers_excluding(&[Category::Chamber, Category::Oratorio]),
        vec![1, 3]
    );
    assert_eq!(BY_CODE.identifiers_excluding_fail_value(), vec![2, 3, 4]);
}

#[test]
fn test_all_values_is_a_fresh_copy() {
    let mut values = BY_CODE.all_values();
    values.clear();
    assert_eq!(BY_CODE.all_values().len(), 4);
}

#[test]
fn test_fluent_collectors() {
    let set = BY_CODE.extend_identifiers_excluding(BTreeSet::from([10]), &[Category::Opera]);
    assert_eq!(set, BTreeSet::from([2, 3, 4, 10]));

    let names = BY_NAME.extend_identifiers_of(vec!["FIRST".to_string()], &[Category::Oratorio]);
    assert_eq!(names, vec!["FIRST", "ORATORIO"]);
}

#[test]
fn test_choices() {
    let choices = BY_CODE.choices(|c| format!("{c:?}"));
    assert_eq!(choices[1], Choice::new(2, "Oratorio"));
    let rendered: Vec<String> = choices.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["1 - Opera", "2 - Oratorio", "3 - Symphonic", "4 - Chamber"]);
}

#[test]
fn test_registry_shared_across_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|code| std::thread::spawn(move || BY_CODE.to_enum(Some(&code)).unwrap()))
        .collect();
    let decoded: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        decoded,
        vec![
            Some(Category::Opera),
            Some(Category::Oratorio),
            Some(Category::Symphonic),
            Some(Category::Chamber)
        ]
    );
}
