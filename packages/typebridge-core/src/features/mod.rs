//! Feature modules (vertical slices)

/// Enum value <-> stored identifier mapping
pub mod identifier_registry;

/// Comparator predicates and specifications
pub mod query_engine;

/// Source -> target object copying
pub mod transform;
