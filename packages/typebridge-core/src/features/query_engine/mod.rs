//! Query engine - comparator-driven predicates and specifications
//!
//! Hexagonal layout:
//! - `domain`: values, the expression AST, comparators, entity ports
//! - `application`: predicate builder and composable specifications
//! - `infrastructure`: in-memory evaluator and diagnostic sinks

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{PredicateBuilder, Specification, DEFAULT_MAX_DISJUNCTS};
pub use domain::{
    CompareOp, CompareStrategy, Comparator, ComparisonStrategy, Entity, Expr, ExprBuilder,
    PropertyAccess, Value, ValueKind,
};
pub use error::QueryError;
pub use infrastructure::{
    DiagnosticLevel, DiagnosticSink, ExprEvaluator, NoopSink, PredicateEvent, RecordingSink,
    TracingSink,
};
