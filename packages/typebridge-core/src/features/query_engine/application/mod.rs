pub mod predicate_builder;
pub mod specification;

pub use predicate_builder::{PredicateBuilder, DEFAULT_MAX_DISJUNCTS};
pub use specification::Specification;
