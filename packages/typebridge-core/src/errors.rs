//! Error types for typebridge-core
//!
//! Each feature owns its error enum. [`TypebridgeError`] unifies them for
//! callers that mix features behind one `?`.

use crate::config::ConfigError;
use crate::features::identifier_registry::RegistryError;
use crate::features::query_engine::QueryError;
use crate::features::transform::TransformError;
use thiserror::Error;

/// Main error type for typebridge operations
#[derive(Debug, Error)]
pub enum TypebridgeError {
    /// Identifier registry construction or strict decode
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Predicate construction
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Object transformation
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Configuration loading
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TypebridgeError {
    /// Only an unknown identifier on strict decode is something a caller
    /// can act on (reject the record). Everything else is a programming or
    /// setup error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TypebridgeError::Registry(e) if e.is_unknown_identifier())
    }
}

/// Result type alias for typebridge operations
pub type Result<T> = std::result::Result<T, TypebridgeError>;
