/*
 * Typebridge Core - typed bridges between domain models and their
 * loosely-typed external representations
 *
 * Feature-First Architecture:
 * - shared/      : Small cross-feature helpers
 * - features/    : identifier_registry, query_engine, transform
 * - config/      : YAML-backed builder defaults
 *
 * Every component is immutable after construction and safe to share
 * across threads.
 */

#![allow(clippy::type_complexity)] // Boxed closure aliases
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared helpers
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, TypebridgeConfig, Validatable};
pub use errors::{Result, TypebridgeError};

pub use features::identifier_registry::{Choice, Enumerated, IdentifierRegistry, RegistryError};

pub use features::query_engine::{
    CompareOp, CompareStrategy, Comparator, DiagnosticLevel, DiagnosticSink, Entity, Expr,
    ExprBuilder, ExprEvaluator, NoopSink, PredicateBuilder, PredicateEvent, PropertyAccess,
    QueryError, RecordingSink, Specification, TracingSink, Value, ValueKind,
};

pub use features::transform::{ObjectTransformer, TransformError};
