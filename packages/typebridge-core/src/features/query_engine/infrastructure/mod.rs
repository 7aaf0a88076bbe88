pub mod diagnostics;
pub mod evaluator;

pub use diagnostics::{
    DiagnosticLevel, DiagnosticSink, NoopSink, PredicateEvent, RecordingSink, TracingSink,
    QUERY_TARGET,
};
pub use evaluator::ExprEvaluator;
